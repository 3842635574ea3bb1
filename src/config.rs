// src/config.rs

use std::sync::Arc;
use std::{env, time::Duration};

use sqlx::postgres::PgPoolOptions;

use crate::{
    cache::QueryCache,
    db::{PdvBackend, PgBackend},
    services::{CaixaService, EmpresaConfigService, EstoqueService},
};

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn PdvBackend>,
    pub cache: QueryCache,
    pub empresa_config: EmpresaConfigService,
    pub estoque: EstoqueService,
    pub caixa: CaixaService,
}

impl AppState {
    // A assinatura retorna um Result: sem conexão não há PDV.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco hospedado, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_backend(Arc::new(PgBackend::new(db_pool))))
    }

    // --- Monta o gráfico de dependências ---
    // Recebe qualquer backend; é por aqui que os testes entram com a
    // implementação em memória.
    pub fn with_backend(backend: Arc<dyn PdvBackend>) -> Self {
        let cache = QueryCache::new();

        let empresa_config = EmpresaConfigService::new(backend.clone(), cache.clone());
        let estoque = EstoqueService::new(backend.clone(), cache.clone());
        let caixa = CaixaService::new(backend.clone());

        Self {
            backend,
            cache,
            empresa_config,
            estoque,
            caixa,
        }
    }
}

// Logger compacto, chamado uma única vez por quem hospeda o PDV.
pub fn init_tracing() {
    tracing_subscriber::fmt().with_target(false).compact().init();
}
