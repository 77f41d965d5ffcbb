use crate::tls::enums::tls_version::TlsVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub(crate) min: TlsVersion,
    pub(crate) max: TlsVersion,
}
