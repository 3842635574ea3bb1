// src/db/postgres.rs

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::db::backend::PdvBackend;
use crate::models::{
    CaixaResumo, EmpresaConfigRow, EmpresaConfigUpdate, NovaMovimentacao, SaldoEstoque,
};

// Implementação de produção sobre o pool do Postgres hospedado.
#[derive(Clone)]
pub struct PgBackend {
    pool: PgPool,
}

impl PgBackend {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PdvBackend for PgBackend {
    async fn buscar_empresa_config(
        &self,
        empresa_id: Uuid,
    ) -> Result<Option<EmpresaConfigRow>, AppError> {
        let row = sqlx::query_as::<_, EmpresaConfigRow>(
            "SELECT empresa_id, bloquear_venda_sem_estoque, permitir_estoque_negativo \
             FROM empresa_config WHERE empresa_id = $1",
        )
        .bind(empresa_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn upsert_empresa_config(
        &self,
        empresa_id: Uuid,
        mudancas: &EmpresaConfigUpdate,
    ) -> Result<(), AppError> {
        // Monta o comando só com as colunas presentes; as ausentes ficam
        // como estão na linha existente.
        let mut colunas: Vec<&str> = Vec::new();
        let mut valores: Vec<bool> = Vec::new();

        if let Some(v) = mudancas.bloquear_venda_sem_estoque {
            colunas.push("bloquear_venda_sem_estoque");
            valores.push(v);
        }
        if let Some(v) = mudancas.permitir_estoque_negativo {
            colunas.push("permitir_estoque_negativo");
            valores.push(v);
        }

        if colunas.is_empty() {
            // Upsert vazio ainda garante a existência da linha.
            sqlx::query(
                "INSERT INTO empresa_config (empresa_id) VALUES ($1) \
                 ON CONFLICT (empresa_id) DO NOTHING",
            )
            .bind(empresa_id)
            .execute(&self.pool)
            .await?;

            return Ok(());
        }

        let mut sql = String::from("INSERT INTO empresa_config (empresa_id");
        for coluna in &colunas {
            sql.push_str(", ");
            sql.push_str(coluna);
        }
        sql.push_str(") VALUES ($1");
        for i in 0..colunas.len() {
            sql.push_str(&format!(", ${}", i + 2));
        }
        sql.push_str(") ON CONFLICT (empresa_id) DO UPDATE SET ");
        for (i, coluna) in colunas.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&format!("{coluna} = EXCLUDED.{coluna}"));
        }

        let mut query = sqlx::query(&sql).bind(empresa_id);
        for valor in valores {
            query = query.bind(valor);
        }
        query.execute(&self.pool).await?;

        Ok(())
    }

    async fn listar_saldos(&self, local_id: Uuid) -> Result<Vec<SaldoEstoque>, AppError> {
        let saldos = sqlx::query_as::<_, SaldoEstoque>(
            "SELECT produto_id, saldo FROM estoque_saldos WHERE local_id = $1",
        )
        .bind(local_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(saldos)
    }

    async fn inserir_movimentacao(
        &self,
        empresa_id: Uuid,
        usuario_id: Uuid,
        movimentacao: &NovaMovimentacao,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO caixa_movimentacoes \
                (empresa_id, caixa_id, origem, ref_id, tipo, valor, descricao, usuario_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(empresa_id)
        .bind(movimentacao.caixa_id)
        .bind(movimentacao.origem)
        .bind(movimentacao.ref_id)
        .bind(movimentacao.tipo)
        .bind(movimentacao.valor)
        .bind(movimentacao.descricao.as_deref())
        .bind(usuario_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn caixa_resumo(&self, caixa_id: Uuid) -> Result<CaixaResumo, AppError> {
        // O procedimento devolve JSON; o formato é dele, não nosso.
        let bruto = sqlx::query_scalar::<_, serde_json::Value>("SELECT caixa_resumo($1)")
            .bind(caixa_id)
            .fetch_one(&self.pool)
            .await?;

        let resumo: CaixaResumo = serde_json::from_value(bruto)?;
        Ok(resumo)
    }

    async fn caixa_fechar(
        &self,
        caixa_id: Uuid,
        valor_contado: Decimal,
        observacao: Option<&str>,
    ) -> Result<(), AppError> {
        sqlx::query("SELECT caixa_fechar($1, $2, $3)")
            .bind(caixa_id)
            .bind(valor_contado)
            .bind(observacao)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
