//! Type aliases for the slots shared between reloads and handshakes.

use crate::tls::structs::certificate_material::CertificateMaterial;
use crate::tls::structs::slot::Slot;
use crate::tls::structs::trust_pool::TrustPool;

pub type CertificateSlot = Slot<CertificateMaterial>;

pub type TrustPoolSlot = Slot<TrustPool>;
