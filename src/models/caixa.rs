// src/models/caixa.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TipoMovimentacao {
    Entrada, // Dinheiro entrando na gaveta
    Saida,   // Dinheiro saindo da gaveta
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrigemMovimentacao {
    Suprimento, // Reforço de troco
    Sangria,    // Retirada para o cofre
}

// --- Structs ---

// Lançamento imutável no livro do caixa. Não há chave de idempotência:
// dois envios geram duas linhas, e quem valida o valor é o servidor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaMovimentacao {
    pub caixa_id: Uuid,
    pub tipo: TipoMovimentacao,
    pub origem: OrigemMovimentacao,
    pub valor: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,

    // Vínculo opcional com o documento que motivou o lançamento.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<Uuid>,
}

// Projeção calculada inteiramente pelo procedimento `caixa_resumo`.
// As chaves vêm no formato do procedimento (snake_case), sem rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaixaResumo {
    pub empresa_id: Uuid,
    pub saldo_inicial: Decimal,
    pub total_vendas: Decimal,
    pub total_entradas: Decimal,
    pub total_saidas: Decimal,

    #[serde(default)]
    pub formas_pagamento: Vec<TotalPorForma>,

    pub saldo_esperado: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalPorForma {
    pub forma_pagamento: String,
    pub valor: Decimal,
}

// Comando de fechamento: uma chamada única, sem estado local de caixa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FechamentoCaixa {
    pub caixa_id: Uuid,
    pub valor_contado: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacao: Option<String>,
}
