// tests/support/builders.rs
use chrono::{TimeZone, Utc};

use cms_pages::domain::page::{Page, PageId, PageKind, PageName};
use cms_pages::domain::page_component::{PageComponent, PageComponentKind, PageComponentSetting};
use cms_pages::domain::page_data::{ContentComponentData, PageData, SingleComponentData};

pub struct PageBuilder {
    id: i64,
    name: String,
    display_name: String,
    description: Option<String>,
    kind: PageKind,
}

impl PageBuilder {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            display_name: name.clone(),
            name,
            description: None,
            kind: PageKind::Content,
        }
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn static_page(mut self) -> Self {
        self.kind = PageKind::Static;
        self
    }

    pub fn build(self) -> Page {
        Page {
            id: PageId::new(self.id).unwrap(),
            name: PageName::new(self.name).unwrap(),
            display_name: self.display_name,
            description: self.description,
            kind: self.kind,
        }
    }
}

pub struct ComponentBuilder {
    id: i64,
    name: String,
    sign: String,
    parent_sign: Option<String>,
    settings: Vec<PageComponentSetting>,
    kind: PageComponentKind,
}

impl ComponentBuilder {
    pub fn new(id: i64, sign: impl Into<String>) -> Self {
        let sign = sign.into();
        Self {
            id,
            name: format!("component-{sign}"),
            sign,
            parent_sign: None,
            settings: Vec::new(),
            kind: PageComponentKind::ContentLeaf,
        }
    }

    pub fn composite(mut self) -> Self {
        self.kind = PageComponentKind::Composite;
        self
    }

    pub fn page_leaf(mut self, target_page_id: i64) -> Self {
        self.kind = PageComponentKind::PageLeaf {
            target_page_id: Some(PageId::new(target_page_id).unwrap()),
        };
        self
    }

    pub fn parent(mut self, parent_sign: impl Into<String>) -> Self {
        self.parent_sign = Some(parent_sign.into());
        self
    }

    pub fn setting(mut self, name: impl Into<String>, field1: impl Into<String>) -> Self {
        self.settings.push(PageComponentSetting {
            name: name.into(),
            field1: Some(field1.into()),
            ..Default::default()
        });
        self
    }

    pub fn build(self) -> PageComponent {
        PageComponent {
            id: self.id,
            name: self.name,
            sign: self.sign,
            parent_sign: self.parent_sign,
            col: Some("12".into()),
            height: None,
            padding: Some("8px".into()),
            margin: None,
            background_color: Some("#ffffff".into()),
            class_name: None,
            settings: self.settings,
            kind: self.kind,
        }
    }
}

pub struct PageDataBuilder {
    id: i64,
    page_id: i64,
    name: String,
    components: Vec<ContentComponentData>,
}

impl PageDataBuilder {
    pub fn new(id: i64, page_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            page_id,
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn component(mut self, id: i64, sign: impl Into<String>, texts: &[&str]) -> Self {
        let single_datas = texts
            .iter()
            .enumerate()
            .map(|(index, text)| SingleComponentData {
                name: format!("text-{index}"),
                sort_index: index as i32,
                field1: Some((*text).to_string()),
                ..Default::default()
            })
            .collect();
        self.components.push(ContentComponentData {
            id,
            sign: sign.into(),
            single_datas,
        });
        self
    }

    pub fn build(self) -> PageData {
        PageData {
            id: self.id,
            title: format!("Title of {}", self.name),
            name: self.name,
            description: None,
            page_id: PageId::new(self.page_id).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            content_component_datas: self.components,
        }
    }
}
