// src/atalhos.rs

// Barra de atalhos do PDV: lista fixa e ordenada, renderizada como está
// pela interface. Nenhum comportamento dinâmico aqui.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atalho {
    pub tecla: &'static str,
    pub descricao: &'static str,
}

pub const ATALHOS: &[Atalho] = &[
    Atalho { tecla: "F2", descricao: "Buscar produto" },
    Atalho { tecla: "F4", descricao: "Quantidade" },
    Atalho { tecla: "F6", descricao: "Sangria" },
    Atalho { tecla: "F7", descricao: "Suprimento" },
    Atalho { tecla: "F8", descricao: "Resumo do caixa" },
    Atalho { tecla: "F10", descricao: "Fechar caixa" },
    Atalho { tecla: "ESC", descricao: "Cancelar" },
];

// Linha única para rodapé de terminal sem barra gráfica.
pub fn legenda() -> String {
    ATALHOS
        .iter()
        .map(|a| format!("{} {}", a.tecla, a.descricao))
        .collect::<Vec<_>>()
        .join("  |  ")
}
