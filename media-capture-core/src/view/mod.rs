pub mod mode_controller;
