pub mod clientes;
pub mod ferramentas;
