// src/session.rs

use uuid::Uuid;

use crate::common::error::AppError;

// Identidade corrente do PDV, resolvida fora daqui (login e seleção de
// empresa). Os acessores recebem a sessão pronta em vez de consultar um
// contexto ambiente: "ainda não carregou" é um estado explícito,
// representado pelos campos em `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sessao {
    pub usuario_id: Option<Uuid>,
    pub empresa_id: Option<Uuid>,
}

impl Sessao {
    pub fn autenticada(usuario_id: Uuid, empresa_id: Uuid) -> Self {
        Self {
            usuario_id: Some(usuario_id),
            empresa_id: Some(empresa_id),
        }
    }

    // Tela de abertura: nada resolvido ainda.
    pub fn anonima() -> Self {
        Self::default()
    }

    // Terminal com empresa escolhida aguardando operador.
    pub fn sem_usuario(empresa_id: Uuid) -> Self {
        Self {
            usuario_id: None,
            empresa_id: Some(empresa_id),
        }
    }

    pub fn usuario_requerido(&self) -> Result<Uuid, AppError> {
        self.usuario_id.ok_or(AppError::NaoAutenticado)
    }

    pub fn empresa_requerida(&self) -> Result<Uuid, AppError> {
        self.empresa_id.ok_or(AppError::EmpresaObrigatoria)
    }
}
