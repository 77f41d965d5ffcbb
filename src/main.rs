use clap::Parser;
use log::{
    error,
    info
};
use parking_lot::deadlock;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use tls_hotswap::common::common::setup_logging;
use tls_hotswap::config::structs::configuration::Configuration;
use tls_hotswap::structs::Cli;
use tls_hotswap::tls::structs::handshake_config::HandshakeConfig;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {}", error);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let (handshake_config, coordinator) = match HandshakeConfig::build(config.tls.clone()) {
        Ok(built) => built,
        Err(error) => {
            error!("[BOOT] Unable to build the TLS configuration: {}", error);
            exit(102);
        }
    };

    if let Some(path) = &args.payload {
        let payload = std::fs::read(path)?;
        if coordinator.reload_from_payload(&payload).is_failed() {
            exit(103);
        }
    }

    if args.check {
        info!("[BOOT] Configuration OK: {:?}", handshake_config);
        return Ok(());
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(error) => {
                    error!("[BOOT] Unable to register shutdown handlers: {:?}", error);
                    exit(104);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            if let Some(period) = config.reload.interval() {
                let reload_task = Arc::clone(&coordinator).spawn_interval(period);
                let reload_handler = tokio_shutdown.clone();
                tokio::spawn(async move {
                    reload_handler.handle().await;
                    info!("[BOOT] Shutting down thread for reloads...");
                    reload_task.abort();
                });
            }

            #[cfg(unix)]
            {
                use tokio::signal::unix::{
                    signal,
                    SignalKind
                };

                let mut hangup = signal(SignalKind::hangup())?;
                let hangup_handler = tokio_shutdown.clone();
                let hangup_coordinator = Arc::clone(&coordinator);
                tokio::spawn(async move {
                    info!("[BOOT] Reloading TLS material on SIGHUP");
                    loop {
                        tokio::select! {
                            _ = hangup.recv() => {
                                info!("[RELOAD] SIGHUP received");
                                let coordinator = Arc::clone(&hangup_coordinator);
                                if let Err(error) = tokio::task::spawn_blocking(move || coordinator.reload_from_files()).await {
                                    error!("[RELOAD] Reload task failed: {}", error);
                                }
                            }
                            _ = hangup_handler.handle() => {
                                info!("[BOOT] Shutting down thread for SIGHUP...");
                                return;
                            }
                        }
                    }
                });
            }

            info!("[BOOT] Serving {} TLS configuration", handshake_config.role());
            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok::<(), std::io::Error>(())
        })
}
