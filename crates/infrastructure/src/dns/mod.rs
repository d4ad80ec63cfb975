pub mod forwarding;
pub mod resolver;

pub use resolver::DnscryptResolver;
