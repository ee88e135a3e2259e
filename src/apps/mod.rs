pub mod order_hall;
pub mod publish_request;
pub mod request_details;
