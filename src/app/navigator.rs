use crate::app::pages::add_review::{AddReviewPage, ReviewForm};
use crate::app::pages::detail::DetailPage;
use crate::app::pages::listing::ListingPage;
use crate::app::pages::login::{LoginForm, LoginPage};
use crate::domain::model::PriceFilter;
use crate::domain::ports::{PlacesApi, RenderSurface, SessionStore};
use crate::utils::error::Result;
use url::Url;

/// 頁面類型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Listing,
    Detail { place_id: String },
    Login,
    AddReview { place_id: String },
}

impl Page {
    pub fn href(&self) -> String {
        match self {
            Page::Listing => "index.html".to_string(),
            Page::Login => "login.html".to_string(),
            Page::Detail { place_id } => with_place_id("place.html", place_id),
            Page::AddReview { place_id } => with_place_id("add_review.html", place_id),
        }
    }
}

fn with_place_id(page: &str, place_id: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id", place_id)
        .finish();
    format!("{}?{}", page, query)
}

/// 導覽時帶入的參數（目前只有房源 id）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    place_id: Option<String>,
}

impl NavigationContext {
    pub fn new(place_id: Option<String>) -> Self {
        Self {
            place_id: place_id.filter(|id| !id.trim().is_empty()),
        }
    }

    /// 從頁面網址讀取 `id` 查詢參數；接受相對路徑如 `place.html?id=abc`
    pub fn from_href(href: &str) -> Self {
        let parsed = Url::parse(href).or_else(|_| {
            Url::parse("http://localhost/").and_then(|base| base.join(href))
        });

        match parsed {
            Ok(url) => Self::new(
                url.query_pairs()
                    .find(|(key, _)| key == "id")
                    .map(|(_, value)| value.into_owned()),
            ),
            Err(e) => {
                tracing::debug!("Unparseable href {}: {}", href, e);
                Self::default()
            }
        }
    }

    pub fn place_id(&self) -> Option<&str> {
        self.place_id.as_deref()
    }
}

/// 持有注入的相依物件，並依頁面控制器回傳的導覽結果切換頁面
pub struct App<A, S, R> {
    api: A,
    session: S,
    surface: R,
}

impl<A, S, R> App<A, S, R>
where
    A: PlacesApi,
    S: SessionStore,
    R: RenderSurface,
{
    pub fn new(api: A, session: S, surface: R) -> Self {
        Self {
            api,
            session,
            surface,
        }
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn into_surface(self) -> R {
        self.surface
    }

    /// 開啟頁面並執行其載入動作；登入與新增評論頁面在送出表單前不做任何事
    pub async fn open(&mut self, page: Page) -> Result<()> {
        tracing::info!("Opening {}", page.href());
        match page {
            Page::Listing => self.open_listing(None).await,
            Page::Detail { place_id } => {
                self.open_detail(&NavigationContext::new(Some(place_id)))
                    .await
            }
            Page::Login | Page::AddReview { .. } => {
                tracing::debug!("Page is idle until its form is submitted");
                Ok(())
            }
        }
    }

    pub async fn open_listing(&mut self, filter: Option<PriceFilter>) -> Result<()> {
        let mut page = ListingPage::new(&self.api, &self.session, &mut self.surface);
        page.load().await?;
        if let Some(filter) = filter {
            page.apply_filter(filter);
        }
        Ok(())
    }

    pub async fn open_detail(&mut self, context: &NavigationContext) -> Result<()> {
        DetailPage::new(&self.api, &self.session, &mut self.surface)
            .load(context)
            .await
    }

    pub async fn submit_login(&mut self, form: &LoginForm) -> Result<Option<Page>> {
        let next = LoginPage::new(&self.api, &self.session, &mut self.surface)
            .submit(form)
            .await;
        self.follow(next.clone()).await?;
        Ok(next)
    }

    pub async fn submit_review(
        &mut self,
        context: &NavigationContext,
        form: &ReviewForm,
    ) -> Result<Option<Page>> {
        let next = AddReviewPage::new(&self.api, &self.session, &mut self.surface)
            .submit(context, form)
            .await;
        self.follow(next.clone()).await?;
        Ok(next)
    }

    /// 登出：清除 token 後回到列表頁
    pub async fn logout(&mut self) -> Result<Page> {
        self.session.clear_token()?;
        tracing::info!("Logged out");
        self.surface.notify("You have been logged out.");
        Ok(Page::Listing)
    }

    async fn follow(&mut self, next: Option<Page>) -> Result<()> {
        match next {
            Some(page) => self.open(page).await,
            None => Ok(()),
        }
    }
}
