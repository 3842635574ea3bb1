// src/db/backend.rs

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::{
    CaixaResumo, EmpresaConfigRow, EmpresaConfigUpdate, NovaMovimentacao, SaldoEstoque,
};

// Superfície remota que o PDV consome: as tabelas e os procedimentos do
// backend hospedado. Os serviços dependem deste trait, não do driver,
// então os testes trocam o Postgres por uma implementação em memória.
#[async_trait]
pub trait PdvBackend: Send + Sync {
    async fn buscar_empresa_config(
        &self,
        empresa_id: Uuid,
    ) -> Result<Option<EmpresaConfigRow>, AppError>;

    // Upsert chaveado em `empresa_id`; só as colunas presentes em
    // `mudancas` são enviadas.
    async fn upsert_empresa_config(
        &self,
        empresa_id: Uuid,
        mudancas: &EmpresaConfigUpdate,
    ) -> Result<(), AppError>;

    async fn listar_saldos(&self, local_id: Uuid) -> Result<Vec<SaldoEstoque>, AppError>;

    async fn inserir_movimentacao(
        &self,
        empresa_id: Uuid,
        usuario_id: Uuid,
        movimentacao: &NovaMovimentacao,
    ) -> Result<(), AppError>;

    async fn caixa_resumo(&self, caixa_id: Uuid) -> Result<CaixaResumo, AppError>;

    async fn caixa_fechar(
        &self,
        caixa_id: Uuid,
        valor_contado: Decimal,
        observacao: Option<&str>,
    ) -> Result<(), AppError>;
}
