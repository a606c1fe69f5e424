pub mod error;

pub mod service {
    pub mod config_service;
    pub mod rotator;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod facade {
    pub mod rotation_facade;
    pub mod traits {
        pub mod i_rotation;
    }
}

pub mod models {
    pub mod face;
    pub mod rotation;
}

pub mod action {
    pub mod cli;
}

pub mod utils {
    pub mod utils;
}
