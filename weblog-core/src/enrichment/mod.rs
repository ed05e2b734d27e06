pub mod user_agent;
