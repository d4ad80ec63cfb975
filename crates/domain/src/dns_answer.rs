use super::DnsRecord;

/// A generic DNS response handed back to the host query pipeline.
///
/// `rcode` carries the upstream RCODE verbatim; `records` keeps the
/// upstream answer-section ordering, filtered to the supported types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub rcode: u16,
    pub records: Vec<DnsRecord>,
}

impl DnsAnswer {
    pub fn new(rcode: u16, records: Vec<DnsRecord>) -> Self {
        Self { rcode, records }
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == 3
    }

    pub fn is_nodata(&self) -> bool {
        self.rcode == 0 && self.records.is_empty()
    }
}
