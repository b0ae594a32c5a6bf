mod category;
mod channel;
mod join_request;
mod membership;
mod message;
mod recommendation;
mod top_list;
mod user;
