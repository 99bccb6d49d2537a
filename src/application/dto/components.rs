use crate::domain::page_component::{PageComponent, PageComponentKind, PageComponentSetting};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ComponentType {
    CompositeComponent,
    PageLeafComponent,
    ContentLeafComponent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageComponentSettingDto {
    pub name: String,
    pub display_name: Option<String>,
    pub field1: Option<String>,
    pub field2: Option<String>,
    pub field3: Option<String>,
    pub field4: Option<String>,
    pub field5: Option<String>,
}

impl From<PageComponentSetting> for PageComponentSettingDto {
    fn from(setting: PageComponentSetting) -> Self {
        Self {
            name: setting.name,
            display_name: setting.display_name,
            field1: setting.field1,
            field2: setting.field2,
            field3: setting.field3,
            field4: setting.field4,
            field5: setting.field5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageComponentDto {
    pub name: String,
    pub sign: String,
    pub parent_sign: Option<String>,
    pub col: Option<String>,
    pub height: Option<String>,
    pub padding: Option<String>,
    pub margin: Option<String>,
    pub background_color: Option<String>,
    pub class_name: Option<String>,
    pub page_component_settings: Vec<PageComponentSettingDto>,
    pub component_type: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_page_id: Option<i64>,
}

impl From<PageComponent> for PageComponentDto {
    fn from(component: PageComponent) -> Self {
        let (component_type, target_page_id) = match component.kind {
            PageComponentKind::Composite => (ComponentType::CompositeComponent, None),
            PageComponentKind::PageLeaf { target_page_id } => (
                ComponentType::PageLeafComponent,
                target_page_id.map(Into::into),
            ),
            PageComponentKind::ContentLeaf => (ComponentType::ContentLeafComponent, None),
        };

        Self {
            name: component.name,
            sign: component.sign,
            parent_sign: component.parent_sign,
            col: component.col,
            height: component.height,
            padding: component.padding,
            margin: component.margin,
            background_color: component.background_color,
            class_name: component.class_name,
            page_component_settings: component
                .settings
                .into_iter()
                .map(Into::into)
                .collect(),
            component_type,
            target_page_id,
        }
    }
}
