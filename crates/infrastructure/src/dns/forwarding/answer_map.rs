//! Answer-section translation
//!
//! Maps upstream wire records into the generic record model. Only a fixed
//! allow-list of rdata types is translated; anything else is dropped from
//! the result set without error. Ordering follows the upstream answer
//! section, with no deduplication.

use cryptdns_domain::{rr_type, DnsRecord};
use hickory_proto::rr::{RData, Record};

pub struct AnswerMapper;

impl AnswerMapper {
    /// Translate the answer records of an upstream response.
    ///
    /// TXT answers keep only their first character-string and are tagged
    /// with the CNAME type code, matching the established output contract
    /// of this resolver.
    pub fn map(records: &[Record]) -> Vec<DnsRecord> {
        let mut mapped = Vec::with_capacity(records.len());

        for record in records {
            let (rtype, data) = match record.data() {
                RData::A(a) => (rr_type::A, a.0.octets().to_vec()),
                RData::AAAA(aaaa) => (rr_type::AAAA, aaaa.0.octets().to_vec()),
                RData::CNAME(target) => (rr_type::CNAME, target.to_utf8().into_bytes()),
                RData::TXT(txt) => (
                    rr_type::CNAME,
                    txt.txt_data()
                        .first()
                        .map(|segment| segment.to_vec())
                        .unwrap_or_default(),
                ),
                _ => continue,
            };

            mapped.push(DnsRecord::new(
                record.name().to_utf8(),
                rtype,
                u16::from(record.dns_class()),
                record.ttl(),
                data,
            ));
        }

        mapped
    }
}
