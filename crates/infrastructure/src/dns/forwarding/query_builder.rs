//! Upstream query construction
//!
//! Builds the wire-format query sent to the DNSCrypt server: a fresh
//! transaction id per call, recursion desired, and exactly one question
//! copied field-for-field from the generic question.

use cryptdns_domain::{DnsQuestion, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use std::str::FromStr;

pub struct QueryBuilder;

impl QueryBuilder {
    /// Build the upstream query message for `question`.
    ///
    /// Transaction ids are generated independently on every call; nothing
    /// is cached between queries.
    pub fn build(question: &DnsQuestion) -> Result<Message, DomainError> {
        let name = Name::from_str(&question.name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", question.name, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::from(question.qtype));
        query.set_query_class(Self::class_from_code(question.qclass)?);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Ok(message)
    }

    fn class_from_code(qclass: u16) -> Result<DNSClass, DomainError> {
        match qclass {
            1 => Ok(DNSClass::IN),
            3 => Ok(DNSClass::CH),
            4 => Ok(DNSClass::HS),
            254 => Ok(DNSClass::NONE),
            255 => Ok(DNSClass::ANY),
            other => Err(DomainError::InvalidDnsMessage(format!(
                "Unsupported query class {}",
                other
            ))),
        }
    }
}
