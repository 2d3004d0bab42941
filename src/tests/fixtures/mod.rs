pub mod clock;

pub mod events {
    pub mod user_event;
}
