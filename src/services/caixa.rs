// src/services/caixa.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::PdvBackend,
    models::{CaixaResumo, FechamentoCaixa, NovaMovimentacao},
    session::Sessao,
};

// Gateway das operações de caixa. Não há cache nem estado local aqui:
// erro do backend sobe como veio, sem retry, e efeito só se observa em
// nova chamada de resumo.
#[derive(Clone)]
pub struct CaixaService {
    backend: Arc<dyn PdvBackend>,
}

impl CaixaService {
    pub fn new(backend: Arc<dyn PdvBackend>) -> Self {
        Self { backend }
    }

    // --- MOVIMENTAÇÃO (SANGRIA / SUPRIMENTO) ---
    // Identidade resolvida vem antes de qualquer chamada: sem operador
    // ou sem empresa, nada é inserido.
    pub async fn registrar_movimentacao(
        &self,
        sessao: &Sessao,
        movimentacao: NovaMovimentacao,
    ) -> Result<(), AppError> {
        let usuario_id = sessao.usuario_requerido()?;
        let empresa_id = sessao.empresa_requerida()?;

        self.backend
            .inserir_movimentacao(empresa_id, usuario_id, &movimentacao)
            .await
    }

    // --- RESUMO ---
    // Projeção calculada inteiramente no servidor.
    pub async fn resumo(&self, caixa_id: Uuid) -> Result<CaixaResumo, AppError> {
        self.backend.caixa_resumo(caixa_id).await
    }

    // --- FECHAMENTO ---
    // Comando único; a transição aberto -> fechado vive só no servidor.
    pub async fn fechar(&self, fechamento: FechamentoCaixa) -> Result<(), AppError> {
        self.backend
            .caixa_fechar(
                fechamento.caixa_id,
                fechamento.valor_contado,
                fechamento.observacao.as_deref(),
            )
            .await
    }
}
