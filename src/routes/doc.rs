use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        Mensagem,
        admin::{
            AtualizarStatusRequest, Cupcake, IngredienteMaisPedido, PedidoAdmin, RelatorioPedidos,
            TotalPorFormaPagamento, TotalPorStatus,
        },
        carrinho::{AdicionarAoCarrinhoRequest, CarrinhoAdicionado, ItemCarrinho},
        clientes::{CadastrarClienteRequest, LoginRequest, LoginResponse},
        enderecos::{EnderecoCriado, NovoEnderecoRequest},
        feedbacks::{FeedbackComCliente, FeedbackCriado, NovoFeedbackRequest},
        ingredientes::NovoIngredienteRequest,
        pedidos::{
            AguardandoExcluidos, FazerPedidoRequest, FinalizarPedidoRequest, PedidoDiretoCriado,
            PedidoDiretoRequest, PedidoFinalizado, PedidosConfirmados, PedidosFinalizados,
            RegistrarResumoRequest, ResumoPedido, ResumoRegistrado,
        },
    },
    models::{ClientePublico, Endereco, Feedback, Ingrediente, Pedido, PedidoCarrinho},
    routes::{admin, carrinho, clientes, enderecos, feedbacks, health, ingredientes, pedidos},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        clientes::cadastrar_cliente,
        clientes::login_cliente,
        clientes::listar_clientes,
        ingredientes::buscar_ingredientes,
        ingredientes::listar_ingredientes_por_tipo,
        ingredientes::adicionar_ingrediente,
        ingredientes::excluir_ingrediente,
        carrinho::adicionar_ao_carrinho,
        carrinho::listar_carrinho,
        carrinho::excluir_pedido_carrinho,
        pedidos::resumo_do_pedido,
        pedidos::registrar_resumo,
        pedidos::fazer_pedido,
        pedidos::finalizar_pedido,
        pedidos::fazer_pedido_direto,
        pedidos::apagar_pedidos_aguardando,
        admin::listar_pedidos_admin,
        admin::atualizar_status_pedido,
        admin::relatorio_pedidos,
        enderecos::adicionar_endereco,
        enderecos::listar_enderecos,
        feedbacks::listar_feedbacks,
        feedbacks::adicionar_feedback,
        feedbacks::excluir_feedback
    ),
    components(
        schemas(
            Mensagem,
            ClientePublico,
            Ingrediente,
            PedidoCarrinho,
            Pedido,
            Endereco,
            Feedback,
            CadastrarClienteRequest,
            LoginRequest,
            LoginResponse,
            NovoIngredienteRequest,
            AdicionarAoCarrinhoRequest,
            CarrinhoAdicionado,
            ItemCarrinho,
            ResumoPedido,
            RegistrarResumoRequest,
            ResumoRegistrado,
            FazerPedidoRequest,
            PedidosConfirmados,
            FinalizarPedidoRequest,
            PedidoFinalizado,
            PedidosFinalizados,
            PedidoDiretoRequest,
            PedidoDiretoCriado,
            AguardandoExcluidos,
            Cupcake,
            PedidoAdmin,
            AtualizarStatusRequest,
            TotalPorStatus,
            TotalPorFormaPagamento,
            IngredienteMaisPedido,
            RelatorioPedidos,
            EnderecoCriado,
            NovoEnderecoRequest,
            FeedbackComCliente,
            FeedbackCriado,
            NovoFeedbackRequest,
            health::Saude
        )
    ),
    tags(
        (name = "Saude", description = "Verificação de disponibilidade"),
        (name = "Clientes", description = "Cadastro e login de clientes"),
        (name = "Ingredientes", description = "Catálogo de ingredientes dos cupcakes"),
        (name = "Carrinho", description = "Carrinho de compras"),
        (name = "Pedidos", description = "Resumo, confirmação e finalização de pedidos"),
        (name = "Admin", description = "Gestão de pedidos e relatórios"),
        (name = "Enderecos", description = "Endereços de entrega"),
        (name = "Feedbacks", description = "Avaliações dos clientes"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
