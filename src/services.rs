pub mod caixa;
pub use caixa::CaixaService;
pub mod empresa_config;
pub use empresa_config::EmpresaConfigService;
pub mod estoque;
pub use estoque::EstoqueService;
