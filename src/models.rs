pub mod caixa;
pub use caixa::{
    CaixaResumo, FechamentoCaixa, NovaMovimentacao, OrigemMovimentacao, TipoMovimentacao,
    TotalPorForma,
};
pub mod empresa;
pub use empresa::{EmpresaConfig, EmpresaConfigRow, EmpresaConfigUpdate};
pub mod estoque;
pub use estoque::{MapaSaldos, SaldoEstoque};
