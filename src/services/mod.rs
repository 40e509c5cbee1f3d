pub mod admin_service;
pub mod carrinho_service;
pub mod cliente_service;
pub mod endereco_service;
pub mod feedback_service;
pub mod ingrediente_service;
pub mod pedido_service;
pub mod resumo_service;
