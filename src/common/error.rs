// src/common/error.rs

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As mensagens do backend passam adiante sem tradução.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usuário não autenticado")]
    NaoAutenticado,

    #[error("Sessão sem empresa vinculada")]
    EmpresaObrigatoria,

    // Falha vinda do backend remoto, já renderizada como texto.
    #[error("{0}")]
    Remoto(String),

    #[error("Resposta do backend em formato inesperado: {0}")]
    RespostaInvalida(#[from] serde_json::Error),
}

// `sqlx::Error` vira `Remoto` ainda na borda do driver, preservando a
// mensagem exata que o Postgres devolveu.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Remoto(e.to_string())
    }
}
