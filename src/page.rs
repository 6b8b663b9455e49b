//! Defines the [`PageDescriptor`] type and the static [`PAGES`] list that
//! drives the generator.

use gtmpl::Value;

/// Describes one prototype page to generate. Descriptors are authored
/// directly in [`PAGES`]; nothing mutates them at runtime.
pub struct PageDescriptor {
    /// Output path relative to the output root, e.g. `course/detail.html`.
    pub path: &'static str,

    /// The display title, substituted into the document title, the page
    /// header, and the card body. Substitution is verbatim; titles must not
    /// contain template-breaking characters.
    pub title: &'static str,

    /// Relative prefix from the generated page back to the shared
    /// stylesheets and components, e.g. `../../` for pages two levels below
    /// the asset root.
    pub asset_root: &'static str,
}

impl PageDescriptor {
    /// Converts a descriptor into the template context. The result is a
    /// [`Value::Object`] exposing `title` and `asset_root`.
    pub fn to_value(&self) -> Value {
        use std::collections::HashMap;
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), self.title.into());
        m.insert("asset_root".to_owned(), self.asset_root.into());
        Value::Object(m)
    }
}

const fn page(
    path: &'static str,
    title: &'static str,
    asset_root: &'static str,
) -> PageDescriptor {
    PageDescriptor {
        path,
        title,
        asset_root,
    }
}

/// Every prototype page, grouped by module. All pages currently sit two
/// directory levels below the asset root.
pub const PAGES: &[PageDescriptor] = &[
    // 课程模块
    page("course/detail.html", "课程详情", "../../"),
    page("course/my-courses.html", "我的课程", "../../"),
    page("course/schedule.html", "课程计划", "../../"),
    page("course/appointment-confirm.html", "预约确认", "../../"),
    // 订单模块
    page("order/confirm.html", "订单确认", "../../"),
    page("order/select-referee.html", "选择推荐人", "../../"),
    page("order/payment.html", "支付", "../../"),
    page("order/detail.html", "订单详情", "../../"),
    // 个人中心模块
    page("mine/index.html", "我的", "../../"),
    page("mine/profile.html", "个人资料", "../../"),
    page("mine/referee-manage.html", "推荐人管理", "../../"),
    page("mine/orders.html", "订单记录", "../../"),
    page("mine/appointments.html", "预约记录", "../../"),
    page("mine/feedback.html", "意见反馈", "../../"),
    page("mine/consultation.html", "咨询预约", "../../"),
    page("mine/contracts.html", "我的协议", "../../"),
    // 大使模块
    page("ambassador/level.html", "传播大使等级", "../../"),
    page("ambassador/apply.html", "申请传播大使", "../../"),
    page("ambassador/upgrade-guide.html", "升级引导", "../../"),
    page("ambassador/contract-sign.html", "签署协议", "../../"),
    page("ambassador/contract-detail.html", "协议详情", "../../"),
    page("ambassador/merit-points.html", "功德分管理", "../../"),
    page("ambassador/cash-points.html", "积分管理", "../../"),
    page("ambassador/withdraw.html", "申请提现", "../../"),
    page("ambassador/qrcode.html", "推荐二维码", "../../"),
    page("ambassador/team.html", "推荐团队", "../../"),
    page("ambassador/activity-records.html", "活动记录", "../../"),
    // 商学院模块
    page("academy/intro.html", "商学院介绍", "../../"),
    page("academy/materials.html", "朋友圈素材", "../../"),
    page("academy/cases.html", "学员案例", "../../"),
    // 公共模块
    page("common/announcement.html", "通知公告", "../../"),
];
