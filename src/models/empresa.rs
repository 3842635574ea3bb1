// src/models/empresa.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Configuração operacional da empresa no PDV. Sempre chega completa ao
// chamador: linha ausente ou coluna NULL cai no padrão de fábrica. A
// empresa dona fica na chave de consulta, não no valor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpresaConfig {
    pub bloquear_venda_sem_estoque: bool,
    pub permitir_estoque_negativo: bool,
}

// Padrão de fábrica: bloqueia venda sem estoque, não permite negativo.
impl Default for EmpresaConfig {
    fn default() -> Self {
        Self {
            bloquear_venda_sem_estoque: true,
            permitir_estoque_negativo: false,
        }
    }
}

impl EmpresaConfig {
    // Regra de liberação usada na tela de venda. O bloqueio só dispara
    // por saldo insuficiente, e qualquer um dos dois flags o derruba.
    pub fn venda_liberada(&self, saldo: Decimal, quantidade: Decimal) -> bool {
        if !self.bloquear_venda_sem_estoque || self.permitir_estoque_negativo {
            return true;
        }
        saldo >= quantidade
    }
}

// Linha crua de `empresa_config`: cada coluna pode vir NULL e cai no
// padrão individualmente, não a linha inteira.
#[derive(Debug, Clone, FromRow)]
pub struct EmpresaConfigRow {
    pub empresa_id: Uuid,
    pub bloquear_venda_sem_estoque: Option<bool>,
    pub permitir_estoque_negativo: Option<bool>,
}

impl From<EmpresaConfigRow> for EmpresaConfig {
    fn from(row: EmpresaConfigRow) -> Self {
        let padrao = EmpresaConfig::default();
        EmpresaConfig {
            bloquear_venda_sem_estoque: row
                .bloquear_venda_sem_estoque
                .unwrap_or(padrao.bloquear_venda_sem_estoque),
            permitir_estoque_negativo: row
                .permitir_estoque_negativo
                .unwrap_or(padrao.permitir_estoque_negativo),
        }
    }
}

// Atualização parcial: só o que estiver `Some` entra no upsert, o resto
// permanece como está no servidor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpresaConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bloquear_venda_sem_estoque: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitir_estoque_negativo: Option<bool>,
}

impl EmpresaConfigUpdate {
    pub fn esta_vazia(&self) -> bool {
        self.bloquear_venda_sem_estoque.is_none() && self.permitir_estoque_negativo.is_none()
    }
}
