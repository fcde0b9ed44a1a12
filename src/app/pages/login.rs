use crate::app::navigator::Page;
use crate::domain::ports::{PlacesApi, RenderSurface, SessionStore};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::validate_non_empty_string;

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("Email", &self.email)?;
        validate_non_empty_string("Password", &self.password)
    }
}

pub struct LoginPage<'a, A: ?Sized, S: ?Sized, R: ?Sized> {
    api: &'a A,
    session: &'a S,
    surface: &'a mut R,
}

impl<'a, A, S, R> LoginPage<'a, A, S, R>
where
    A: PlacesApi + ?Sized,
    S: SessionStore + ?Sized,
    R: RenderSurface + ?Sized,
{
    pub fn new(api: &'a A, session: &'a S, surface: &'a mut R) -> Self {
        Self {
            api,
            session,
            surface,
        }
    }

    /// 送出登入表單。成功時保存 token 並回傳列表頁；失敗時提示並留在本頁
    pub async fn submit(&mut self, form: &LoginForm) -> Option<Page> {
        if let Err(e) = form.validate() {
            self.surface.notify(&e.user_friendly_message());
            return None;
        }

        let token = match self.api.login(form.email.trim(), &form.password).await {
            Ok(token) => token,
            Err(e @ ClientError::Api { .. }) => {
                tracing::warn!("Login rejected: {}", e);
                self.surface
                    .notify(&format!("Login failed: {}", e.user_friendly_message()));
                return None;
            }
            Err(e) => {
                tracing::error!("Login error: {}", e);
                self.surface
                    .notify("Something went wrong while trying to log in.");
                return None;
            }
        };

        if let Err(e) = self.session.set_token(&token) {
            tracing::error!("Cannot persist session: {}", e);
            self.surface
                .notify("Something went wrong while trying to log in.");
            return None;
        }

        tracing::info!("✅ Logged in as {}", form.email.trim());
        Some(Page::Listing)
    }
}
