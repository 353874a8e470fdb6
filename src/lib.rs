pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod decision;
            pub mod participant_update;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod seed_activities {
                pub mod handler;
            }
            pub mod list_activities {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod sign_up {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod activity_store;
                pub mod activity_store_in_memory;
                pub mod activity_store_sqlite;
            }
        }
    }
}

pub mod shell;
