// src/services/empresa_config.rs

use std::sync::Arc;

use crate::{
    cache::{QueryCache, QueryKey},
    common::error::AppError,
    db::PdvBackend,
    models::{EmpresaConfig, EmpresaConfigUpdate},
    session::Sessao,
};

#[derive(Clone)]
pub struct EmpresaConfigService {
    backend: Arc<dyn PdvBackend>,
    cache: QueryCache,
}

impl EmpresaConfigService {
    pub fn new(backend: Arc<dyn PdvBackend>, cache: QueryCache) -> Self {
        Self { backend, cache }
    }

    // --- LEITURA ---
    pub async fn buscar(&self, sessao: &Sessao) -> Result<EmpresaConfig, AppError> {
        // Sessão sem empresa é o estado "deslogado / ainda carregando":
        // devolve os padrões sem tocar no backend, não é erro.
        let empresa_id = match sessao.empresa_id {
            Some(id) => id,
            None => return Ok(EmpresaConfig::default()),
        };

        let chave = QueryKey::EmpresaConfig { empresa_id };
        if let Some(config) = self.cache.get::<EmpresaConfig>(&chave) {
            return Ok(config);
        }

        // 1. Busca a linha (pode não existir ainda)
        let row = self.backend.buscar_empresa_config(empresa_id).await?;

        // 2. Preenche os padrões campo a campo
        let config = match row {
            Some(row) => EmpresaConfig::from(row),
            None => EmpresaConfig::default(),
        };

        self.cache.insert(chave, &config);
        Ok(config)
    }

    // --- ESCRITA ---
    pub async fn atualizar(
        &self,
        sessao: &Sessao,
        mudancas: EmpresaConfigUpdate,
    ) -> Result<(), AppError> {
        // Escrita exige empresa resolvida.
        let empresa_id = sessao.empresa_requerida()?;

        // Atualização sem nenhum campo não tem o que enviar: não vai ao
        // backend e o cache segue válido.
        if mudancas.esta_vazia() {
            return Ok(());
        }

        // 1. Upsert chaveado na empresa, só com os campos presentes
        self.backend.upsert_empresa_config(empresa_id, &mudancas).await?;

        // 2. Invalidação síncrona: a próxima leitura da mesma empresa
        //    rebusca no backend e enxerga o valor novo
        self.cache.invalidate(&QueryKey::EmpresaConfig { empresa_id });

        Ok(())
    }
}
