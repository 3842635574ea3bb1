// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use pdv_core::common::error::AppError;
use pdv_core::db::PdvBackend;
use pdv_core::models::{
    CaixaResumo, EmpresaConfigRow, EmpresaConfigUpdate, NovaMovimentacao, OrigemMovimentacao,
    SaldoEstoque, TipoMovimentacao, TotalPorForma,
};
use pdv_core::AppState;

/// Backend em memória com os mesmos contratos do Postgres hospedado.
/// Conta cada chamada remota (para os testes de cache) e tem um
/// interruptor de falha que devolve a mensagem configurada, intacta.
#[derive(Default)]
pub struct BackendMemoria {
    pub estado: RwLock<EstadoRemoto>,
    pub chamadas: Contadores,
}

#[derive(Default)]
pub struct EstadoRemoto {
    pub configs: HashMap<Uuid, EmpresaConfigRow>,
    pub saldos: HashMap<Uuid, Vec<SaldoEstoque>>,
    pub movimentacoes: Vec<MovimentacaoGravada>,
    pub resumos: HashMap<Uuid, CaixaResumo>,
    pub fechamentos: Vec<FechamentoGravado>,
    pub falha: Option<String>,
}

pub struct MovimentacaoGravada {
    pub empresa_id: Uuid,
    pub usuario_id: Uuid,
    pub movimentacao: NovaMovimentacao,
}

pub struct FechamentoGravado {
    pub caixa_id: Uuid,
    pub valor_contado: Decimal,
    pub observacao: Option<String>,
}

#[derive(Default)]
pub struct Contadores {
    pub buscas_config: AtomicUsize,
    pub upserts_config: AtomicUsize,
    pub listagens_saldo: AtomicUsize,
    pub insercoes_movimentacao: AtomicUsize,
    pub resumos: AtomicUsize,
    pub fechamentos: AtomicUsize,
}

impl BackendMemoria {
    /// Simula uma falha remota: toda chamada passa a devolver `Remoto`
    /// com exatamente esta mensagem.
    pub fn falhar_com(&self, mensagem: &str) {
        self.estado.write().unwrap().falha = Some(mensagem.to_string());
    }

    fn falha(&self) -> Option<AppError> {
        self.estado
            .read()
            .unwrap()
            .falha
            .clone()
            .map(AppError::Remoto)
    }
}

#[async_trait]
impl PdvBackend for BackendMemoria {
    async fn buscar_empresa_config(
        &self,
        empresa_id: Uuid,
    ) -> Result<Option<EmpresaConfigRow>, AppError> {
        self.chamadas.buscas_config.fetch_add(1, Ordering::SeqCst);
        if let Some(erro) = self.falha() {
            return Err(erro);
        }
        Ok(self.estado.read().unwrap().configs.get(&empresa_id).cloned())
    }

    async fn upsert_empresa_config(
        &self,
        empresa_id: Uuid,
        mudancas: &EmpresaConfigUpdate,
    ) -> Result<(), AppError> {
        self.chamadas.upserts_config.fetch_add(1, Ordering::SeqCst);
        if let Some(erro) = self.falha() {
            return Err(erro);
        }

        // Reproduz o upsert parcial: só os campos presentes mudam.
        let mut estado = self.estado.write().unwrap();
        let row = estado.configs.entry(empresa_id).or_insert(EmpresaConfigRow {
            empresa_id,
            bloquear_venda_sem_estoque: None,
            permitir_estoque_negativo: None,
        });
        if let Some(v) = mudancas.bloquear_venda_sem_estoque {
            row.bloquear_venda_sem_estoque = Some(v);
        }
        if let Some(v) = mudancas.permitir_estoque_negativo {
            row.permitir_estoque_negativo = Some(v);
        }
        Ok(())
    }

    async fn listar_saldos(&self, local_id: Uuid) -> Result<Vec<SaldoEstoque>, AppError> {
        self.chamadas.listagens_saldo.fetch_add(1, Ordering::SeqCst);
        if let Some(erro) = self.falha() {
            return Err(erro);
        }
        Ok(self
            .estado
            .read()
            .unwrap()
            .saldos
            .get(&local_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn inserir_movimentacao(
        &self,
        empresa_id: Uuid,
        usuario_id: Uuid,
        movimentacao: &NovaMovimentacao,
    ) -> Result<(), AppError> {
        self.chamadas
            .insercoes_movimentacao
            .fetch_add(1, Ordering::SeqCst);
        if let Some(erro) = self.falha() {
            return Err(erro);
        }
        self.estado
            .write()
            .unwrap()
            .movimentacoes
            .push(MovimentacaoGravada {
                empresa_id,
                usuario_id,
                movimentacao: movimentacao.clone(),
            });
        Ok(())
    }

    async fn caixa_resumo(&self, caixa_id: Uuid) -> Result<CaixaResumo, AppError> {
        self.chamadas.resumos.fetch_add(1, Ordering::SeqCst);
        if let Some(erro) = self.falha() {
            return Err(erro);
        }
        self.estado
            .read()
            .unwrap()
            .resumos
            .get(&caixa_id)
            .cloned()
            .ok_or_else(|| AppError::Remoto("Caixa não encontrado".to_string()))
    }

    async fn caixa_fechar(
        &self,
        caixa_id: Uuid,
        valor_contado: Decimal,
        observacao: Option<&str>,
    ) -> Result<(), AppError> {
        self.chamadas.fechamentos.fetch_add(1, Ordering::SeqCst);
        if let Some(erro) = self.falha() {
            return Err(erro);
        }
        self.estado.write().unwrap().fechamentos.push(FechamentoGravado {
            caixa_id,
            valor_contado,
            observacao: observacao.map(str::to_string),
        });
        Ok(())
    }
}

/// Backend em memória + serviços montados sobre ele.
pub fn estado_teste() -> (Arc<BackendMemoria>, AppState) {
    let backend = Arc::new(BackendMemoria::default());
    let estado = AppState::with_backend(backend.clone());
    (backend, estado)
}

pub fn linha_config(
    empresa_id: Uuid,
    bloquear: Option<bool>,
    permitir: Option<bool>,
) -> EmpresaConfigRow {
    EmpresaConfigRow {
        empresa_id,
        bloquear_venda_sem_estoque: bloquear,
        permitir_estoque_negativo: permitir,
    }
}

pub fn saldo(produto_id: Uuid, saldo: Option<Decimal>) -> SaldoEstoque {
    SaldoEstoque { produto_id, saldo }
}

/// Movimentação típica de sangria para os testes do gateway.
pub fn sangria_exemplo(caixa_id: Uuid) -> NovaMovimentacao {
    NovaMovimentacao {
        caixa_id,
        tipo: TipoMovimentacao::Saida,
        origem: OrigemMovimentacao::Sangria,
        valor: dec!(50),
        descricao: Some("Sangria para o cofre".to_string()),
        ref_id: None,
    }
}

pub fn resumo_exemplo(empresa_id: Uuid) -> CaixaResumo {
    CaixaResumo {
        empresa_id,
        saldo_inicial: dec!(100),
        total_vendas: dec!(350.5),
        total_entradas: dec!(30),
        total_saidas: dec!(50),
        formas_pagamento: vec![
            TotalPorForma {
                forma_pagamento: "dinheiro".to_string(),
                valor: dec!(200.5),
            },
            TotalPorForma {
                forma_pagamento: "pix".to_string(),
                valor: dec!(150),
            },
        ],
        saldo_esperado: dec!(430.5),
    }
}
