//! End-to-end resolve path: session manager, resolver adapter and the
//! host-facing use case composed the way a host process wires them.

use async_trait::async_trait;
use cryptdns_application::ports::{
    DnscryptClient, Notification, Notifier, ResolveOutcome,
};
use cryptdns_application::use_cases::{ResolveQueryUseCase, UpdateUpstreamUseCase};
use cryptdns_application::SessionManager;
use cryptdns_domain::{
    rr_type, ConnectionContext, DnsQuestion, DomainError, ServerStamp, UpstreamSession,
};
use cryptdns_infrastructure::DnscryptResolver;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

struct FixtureClient;

#[async_trait]
impl DnscryptClient for FixtureClient {
    async fn dial(&self, stamp: &ServerStamp) -> Result<UpstreamSession, DomainError> {
        if !stamp.as_str().starts_with("sdns://") {
            return Err(DomainError::InvalidStamp(stamp.as_str().to_string()));
        }
        Ok(UpstreamSession::new(
            stamp.clone(),
            "2.dnscrypt-cert.fixture".to_string(),
            "203.0.113.1:443".to_string(),
        ))
    }

    async fn exchange(
        &self,
        query: Message,
        _session: &UpstreamSession,
    ) -> Result<Message, DomainError> {
        let question = &query.queries()[0];
        let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);

        if question.name().to_utf8().starts_with("missing.") {
            response.set_response_code(ResponseCode::NXDomain);
            return Ok(response);
        }

        response.add_answer(Record::from_rdata(
            question.name().clone(),
            300,
            RData::A(A::new(93, 184, 216, 34)),
        ));
        response.add_answer(Record::from_rdata(
            question.name().clone(),
            300,
            RData::TXT(TXT::new(vec!["v=spf1".to_string(), "ignored".to_string()])),
        ));
        Ok(response)
    }
}

struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, _notification: &Notification) -> Result<(), DomainError> {
        Ok(())
    }
}

struct Pipeline {
    update: UpdateUpstreamUseCase,
    resolve: ResolveQueryUseCase,
}

fn make_pipeline() -> Pipeline {
    let client: Arc<dyn DnscryptClient> = Arc::new(FixtureClient);
    let sessions = Arc::new(SessionManager::new(client.clone(), Arc::new(NullNotifier)));
    let resolver = Arc::new(DnscryptResolver::new(sessions.clone(), client, 1000));
    Pipeline {
        update: UpdateUpstreamUseCase::new(sessions),
        resolve: ResolveQueryUseCase::new(resolver),
    }
}

async fn resolve(pipeline: &Pipeline, name: &str) -> ResolveOutcome {
    pipeline
        .resolve
        .execute(
            &DnsQuestion::new(name, rr_type::A, 1),
            &ConnectionContext::new("it-conn"),
            &CancellationToken::new(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_not_ready_until_first_valid_stamp() {
    let pipeline = make_pipeline();

    assert_eq!(
        resolve(&pipeline, "example.com.").await,
        ResolveOutcome::NotConfigured
    );

    // An invalid stamp does not make the resolver ready.
    pipeline.update.execute("garbage").await;
    assert_eq!(
        resolve(&pipeline, "example.com.").await,
        ResolveOutcome::NotConfigured
    );

    pipeline.update.execute("sdns://fixture").await;
    let outcome = resolve(&pipeline, "example.com.").await;
    assert!(matches!(outcome, ResolveOutcome::Resolved(_)));
}

#[tokio::test]
async fn test_resolved_answer_shape() {
    let pipeline = make_pipeline();
    pipeline.update.execute("sdns://fixture").await;

    let outcome = resolve(&pipeline, "example.com.").await;
    let answer = outcome.answer().expect("resolved");

    assert_eq!(answer.rcode, 0);
    assert_eq!(answer.records.len(), 2);
    assert_eq!(answer.records[0].rtype, rr_type::A);
    assert_eq!(answer.records[0].data, vec![93, 184, 216, 34]);
    // TXT comes back under the CNAME type code with only the first segment.
    assert_eq!(answer.records[1].rtype, rr_type::CNAME);
    assert_eq!(answer.records[1].data, b"v=spf1".to_vec());
}

#[tokio::test]
async fn test_nxdomain_flows_through_the_use_case() {
    let pipeline = make_pipeline();
    pipeline.update.execute("sdns://fixture").await;

    let outcome = resolve(&pipeline, "missing.example.com.").await;
    let answer = outcome.answer().expect("resolved");

    assert_eq!(answer.rcode, 3);
    assert!(answer.records.is_empty());
}
