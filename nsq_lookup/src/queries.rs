pub mod lookup_topic;
