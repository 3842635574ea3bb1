// src/cache.rs

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

// Chave estruturada de consulta: entidade + parâmetros, comparada por
// igualdade exata. Substitui a chave de texto concatenado que o PDV
// usava antes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    EmpresaConfig { empresa_id: Uuid },
    SaldosDeposito { local_id: Uuid },
}

// Cache de leitura em memória, vivo apenas enquanto a sessão do PDV
// existir. É consultivo: qualquer anomalia interna vira miss, nunca
// erro para o chamador.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    store: Arc<RwLock<HashMap<QueryKey, String>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: DeserializeOwned>(&self, chave: &QueryKey) -> Option<T> {
        let store = self.store.read().unwrap();
        match store.get(chave) {
            None => {
                tracing::debug!("Cache: miss em {:?}", chave);
                None
            }
            Some(json) => match serde_json::from_str(json) {
                Ok(valor) => {
                    tracing::debug!("Cache: hit em {:?}", chave);
                    Some(valor)
                }
                Err(e) => {
                    tracing::warn!("Cache: entrada ilegível em {:?} ({}), descartando", chave, e);
                    drop(store);
                    self.store.write().unwrap().remove(chave);
                    None
                }
            },
        }
    }

    pub fn insert<T: Serialize>(&self, chave: QueryKey, valor: &T) {
        match serde_json::to_string(valor) {
            Ok(json) => {
                self.store.write().unwrap().insert(chave, json);
                tracing::debug!("Cache: gravado {:?}", chave);
            }
            Err(e) => tracing::warn!("Cache: falha ao serializar {:?} ({})", chave, e),
        }
    }

    // Invalidação por igualdade exata de chave, disparada logo após cada
    // escrita bem-sucedida na mesma entidade.
    pub fn invalidate(&self, chave: &QueryKey) {
        let removido = self.store.write().unwrap().remove(chave).is_some();
        if removido {
            tracing::debug!("Cache: invalidado {:?}", chave);
        }
    }

    // Troca de sessão descarta tudo.
    pub fn clear(&self) {
        self.store.write().unwrap().clear();
    }
}
