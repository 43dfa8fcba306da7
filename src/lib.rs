// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod errors;
            pub mod user;
        }
        pub mod use_cases {
            pub mod create_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_users {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_user {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
                pub mod user_body;
            }
            pub mod outbound {
                pub mod user_store;
                pub mod user_store_in_memory;
            }
        }
    }
}

pub mod shell;
