use std::sync::Arc;

/// A generic DNS question as handed over by the host query pipeline.
///
/// `qtype` and `qclass` are the raw 16-bit wire codes; the question is
/// forwarded to the upstream server field-for-field, so no interpretation
/// happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub qtype: u16,
    pub qclass: u16,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, qtype: u16, qclass: u16) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }
}
