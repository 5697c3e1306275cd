//! Paths of the picking backend, relative to `backend.base_url`

pub const ORDER_LOOKUP: &str = "/pedido/consultar";
pub const ORDER_HISTORY: &str = "/pedido/historico";
pub const SEPARATION_LIST: &str = "/separacao/listar";
pub const SEPARATION_COMMIT: &str = "/separacao/gravar";
pub const DELIVERY_LIST: &str = "/entrega/listar";
/// Declared by the backend but no confirmation step uses it yet
pub const DELIVERY_COMMIT: &str = "/entrega/gravar";
pub const PASSWORD_VALIDATION: &str = "/usuario/validarSenha";
pub const PRODUCT_IMAGE: &str = "/produto/imagem";
pub const PRODUCT_IMAGE_UPLOAD: &str = "/produto/imagem/gravar";
