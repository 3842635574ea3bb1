// src/common/format.rs

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

// Formatação pt-BR usada em toda a interface do caixa.
// `1234.5` vira "R$ 1.234,50": milhar com ponto, decimal com vírgula.
pub fn formatar_moeda(valor: Decimal) -> String {
    let arredondado = valor.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sinal = if arredondado.is_sign_negative() { "-" } else { "" };
    let texto = arredondado.abs().to_string();
    let (inteiro, centavos) = match texto.split_once('.') {
        Some((i, c)) => (i.to_string(), format!("{:0<2}", c)),
        None => (texto, "00".to_string()),
    };
    let mut invertido = String::new();
    for (pos, digito) in inteiro.chars().rev().enumerate() {
        if pos > 0 && pos % 3 == 0 {
            invertido.push('.');
        }
        invertido.push(digito);
    }
    let agrupado: String = invertido.chars().rev().collect();
    format!("R$ {}{},{}", sinal, agrupado, centavos)
}

pub fn formatar_data(data: DateTime<Utc>) -> String {
    data.format("%d/%m/%Y").to_string()
}

pub fn formatar_hora(data: DateTime<Utc>) -> String {
    data.format("%H:%M").to_string()
}

// Variantes para o texto cru que o backend envia (RFC 3339). Quando o
// texto não parsear, devolve como veio em vez de esconder o dado.
pub fn formatar_data_str(texto: &str) -> String {
    match DateTime::parse_from_rfc3339(texto) {
        Ok(data) => data.format("%d/%m/%Y").to_string(),
        Err(_) => texto.to_string(),
    }
}

pub fn formatar_hora_str(texto: &str) -> String {
    match DateTime::parse_from_rfc3339(texto) {
        Ok(data) => data.format("%H:%M").to_string(),
        Err(_) => texto.to_string(),
    }
}
