//! Modelos do sistema
//!
//! Este módulo contém os modelos de dados expostos pela API.

pub mod moto;
