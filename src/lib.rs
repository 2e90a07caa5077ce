pub mod modules {
    pub mod students {
        pub mod core {
            pub mod decider {
                pub mod add_student {
                    pub mod command;
                    pub mod decide;
                }
                pub mod remove_student {
                    pub mod command;
                    pub mod decide;
                }
            }
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod ports;
            pub mod registry;
            pub mod state;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod add_student {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_student {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod has_student {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod roster_in_memory;
            }
        }
    }
}

pub mod shell;

pub use modules::students::core::decision::RegistryError;
pub use modules::students::core::registry::StudentRegistry;
