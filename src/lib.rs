// src/lib.rs

// Camada de acesso a dados do PDV: configuração da empresa, saldos de
// estoque por depósito e operações de caixa sobre o backend hospedado.

pub mod atalhos;
pub mod cache;
pub mod common;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod session;

pub use cache::{QueryCache, QueryKey};
pub use common::error::AppError;
pub use config::AppState;
pub use session::Sessao;
