mod answer_map;
mod query_builder;

pub use answer_map::AnswerMapper;
pub use query_builder::QueryBuilder;
