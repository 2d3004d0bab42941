pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod state_store;
    }
}

pub mod modules {
    pub mod user_events {
        pub mod core {
            pub mod actions;
            pub mod day_groups;
            pub mod event;
            pub mod evolve;
            pub mod ports;
            pub mod recorder;
            pub mod state;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod stores;
            pub mod load_user_events {
                pub mod handler;
            }
            pub mod create_user_event {
                pub mod handler;
            }
            pub mod update_user_event {
                pub mod handler;
            }
            pub mod delete_user_event {
                pub mod handler;
            }
            pub mod toggle_recorder {
                pub mod handler;
            }
            pub mod list_day_groups {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod http_user_events_api;
                pub mod in_memory_user_events_api;
            }
        }
    }
}

pub mod shell;
