// src/services/estoque.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    cache::{QueryCache, QueryKey},
    common::error::AppError,
    db::PdvBackend,
    models::MapaSaldos,
};

#[derive(Clone)]
pub struct EstoqueService {
    backend: Arc<dyn PdvBackend>,
    cache: QueryCache,
}

impl EstoqueService {
    pub fn new(backend: Arc<dyn PdvBackend>, cache: QueryCache) -> Self {
        Self { backend, cache }
    }

    // Saldos de um depósito, mapeados por produto. Depósito ausente
    // devolve mapa vazio sem chamada remota, o mesmo resultado de um
    // depósito sem itens; quem precisa distinguir confere o local antes.
    pub async fn saldos_por_deposito(
        &self,
        local_id: Option<Uuid>,
    ) -> Result<MapaSaldos, AppError> {
        let local_id = match local_id {
            Some(id) => id,
            None => return Ok(MapaSaldos::new()),
        };

        let chave = QueryKey::SaldosDeposito { local_id };
        if let Some(saldos) = self.cache.get::<MapaSaldos>(&chave) {
            return Ok(saldos);
        }

        let linhas = self.backend.listar_saldos(local_id).await?;

        let mut mapa = MapaSaldos::with_capacity(linhas.len());
        for linha in linhas {
            // saldo NULL conta como zero
            mapa.insert(linha.produto_id, linha.saldo.unwrap_or_default());
        }

        self.cache.insert(chave, &mapa);
        Ok(mapa)
    }
}
