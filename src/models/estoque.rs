// src/models/estoque.rs

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Mapa produto -> saldo de um depósito, como o PDV consome na venda.
pub type MapaSaldos = HashMap<Uuid, Decimal>;

// Linha de `estoque_saldos` no recorte que interessa ao PDV.
// `saldo` NULL significa produto nunca movimentado, que vira zero no mapa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SaldoEstoque {
    pub produto_id: Uuid,
    pub saldo: Option<Decimal>,
}
