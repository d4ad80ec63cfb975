mod resolve_query;
mod update_upstream;

pub use resolve_query::ResolveQueryUseCase;
pub use update_upstream::UpdateUpstreamUseCase;
