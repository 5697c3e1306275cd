use serde::{Deserialize, Serialize};

/// Проверка пароля сотрудника перед фиксацией отбора (POST /usuario/validarSenha)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordValidationRequest {
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordValidationResponse {
    pub success: bool,
    /// Name recorded as the separating user on commit
    #[serde(rename = "nomeUsuario", default)]
    pub user_name: String,
}
