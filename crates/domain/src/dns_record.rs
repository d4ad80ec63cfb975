/// Wire codes for the record types this resolver maps into generic records.
pub mod rr_type {
    pub const A: u16 = 1;
    pub const CNAME: u16 = 5;
    pub const TXT: u16 = 16;
    pub const AAAA: u16 = 28;
}

/// A generic DNS resource record.
///
/// `data` is the raw payload whose interpretation depends on `rtype`:
/// 4 address octets for A, 16 for AAAA, the target name bytes for CNAME.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub data: Vec<u8>,
}

impl DnsRecord {
    pub fn new(name: String, rtype: u16, class: u16, ttl: u32, data: Vec<u8>) -> Self {
        Self {
            name,
            rtype,
            class,
            ttl,
            data,
        }
    }

    pub fn is_address(&self) -> bool {
        self.rtype == rr_type::A || self.rtype == rr_type::AAAA
    }
}
