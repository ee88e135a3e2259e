//! Static seed data standing in for the marketplace backend, plus the
//! generated time-slot option list.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::models::{Candidate, DispatchStats, Order, OrderStatus};

/// Selectable request categories.
pub const CATEGORIES: &[&str] = &["家政保洁", "家庭维修", "跑腿代办", "宠物服务", "搬家拉货"];

pub fn seed_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "w1".to_string(),
            name: "王建国".to_string(),
            title: "金牌维修".to_string(),
            tags: vec!["实名认证".to_string(), "技能证书".to_string()],
            rating: 4.9,
            price: 60,
            distance: "500m".to_string(),
            age: 42,
            experience: 12,
            product_name: Some("极速上门维修".to_string()),
            product_tags: vec![
                "电路检修".to_string(),
                "水管疏通".to_string(),
                "五金更换".to_string(),
            ],
            unread_messages: 2,
        },
        Candidate {
            id: "w2".to_string(),
            name: "李秀英".to_string(),
            title: "五星保洁".to_string(),
            tags: vec!["健康证".to_string(), "无犯罪记录".to_string()],
            rating: 4.9,
            price: 45,
            distance: "1.2km".to_string(),
            age: 38,
            experience: 8,
            product_name: Some("全屋深度保洁".to_string()),
            product_tags: vec![
                "玻璃清洗".to_string(),
                "高温杀毒".to_string(),
                "除螨".to_string(),
            ],
            unread_messages: 0,
        },
        Candidate {
            id: "w3".to_string(),
            name: "张伟".to_string(),
            title: "专业跑腿".to_string(),
            tags: vec!["退伍军人".to_string(), "驾照A1".to_string()],
            rating: 4.8,
            price: 30,
            distance: "300m".to_string(),
            age: 29,
            experience: 4,
            product_name: Some("同城急送/代排队".to_string()),
            product_tags: vec!["1小时达".to_string(), "全程冷链".to_string()],
            unread_messages: 5,
        },
    ]
}

pub fn seed_recommended() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "r1".to_string(),
            name: "赵淑芬".to_string(),
            title: "资深月嫂".to_string(),
            tags: vec!["育婴师证".to_string(), "耐心细致".to_string()],
            rating: 4.7,
            price: 55,
            distance: "2.0km".to_string(),
            age: 45,
            experience: 15,
            product_name: None,
            product_tags: Vec::new(),
            unread_messages: 1,
        },
        Candidate {
            id: "r2".to_string(),
            name: "周杰".to_string(),
            title: "家电清洗".to_string(),
            tags: vec!["拆机清洗".to_string(), "原厂工具".to_string()],
            rating: 4.6,
            price: 80,
            distance: "3.5km".to_string(),
            age: 33,
            experience: 6,
            product_name: None,
            product_tags: Vec::new(),
            unread_messages: 0,
        },
    ]
}

pub fn seed_orders() -> Vec<Order> {
    vec![
        Order {
            id: "o1".to_string(),
            client_name: "陈女士".to_string(),
            service_type: "家政保洁".to_string(),
            summary: "家里大扫除，需要擦玻璃。大概3个小时工作量，需要带工具。".to_string(),
            time: "今天下午 14:00".to_string(),
            distance: "500m".to_string(),
            address: "阳光花园 3期 5号楼 802".to_string(),
            status: OrderStatus::Pending,
            unread_messages: 3,
        },
        Order {
            id: "o2".to_string(),
            client_name: "刘先生".to_string(),
            service_type: "水电维修".to_string(),
            summary: "厨房水龙头漏水严重，需要更换阀芯。".to_string(),
            time: "明天上午 09:00".to_string(),
            distance: "1.5km".to_string(),
            address: "幸福里小区 12栋 301".to_string(),
            status: OrderStatus::Pending,
            unread_messages: 0,
        },
        Order {
            id: "o3".to_string(),
            client_name: "赵小姐".to_string(),
            service_type: "代取快递".to_string(),
            summary: "有三个大件包裹需要帮忙搬上楼，没有电梯。".to_string(),
            time: "今天 18:00".to_string(),
            distance: "800m".to_string(),
            address: "学府路 108号 2单元".to_string(),
            status: OrderStatus::Pending,
            unread_messages: 0,
        },
        Order {
            id: "o4".to_string(),
            client_name: "周奶奶".to_string(),
            service_type: "帮忙遛狗".to_string(),
            summary: "金毛犬，需要遛半小时，就在小区公园。".to_string(),
            time: "今天 20:00".to_string(),
            distance: "200m".to_string(),
            address: "阳光花园 1期 别墅区 6号".to_string(),
            status: OrderStatus::Matched,
            unread_messages: 1,
        },
    ]
}

/// Dashboard counters at session start.
pub fn seed_stats() -> DispatchStats {
    DispatchStats {
        pushed: 12,
        matched: 5,
        taken: 2,
    }
}

/// Morning/afternoon slots for the next seven days.
pub fn time_slot_options() -> Vec<String> {
    time_slot_options_from(Local::now().date_naive())
}

fn time_slot_options_from(today: NaiveDate) -> Vec<String> {
    let mut options = Vec::with_capacity(14);
    for i in 0..7 {
        let day = today + Duration::days(i);
        let label = match i {
            0 => "今天".to_string(),
            1 => "明天".to_string(),
            _ => weekday_label(day.weekday()).to_string(),
        };
        let date = format!("{} {}月{}日", label, day.month(), day.day());
        options.push(format!("{date} 上午 (08:00-12:00)"));
        options.push(format!("{date} 下午 (13:00-18:00)"));
    }
    options
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "周一",
        Weekday::Tue => "周二",
        Weekday::Wed => "周三",
        Weekday::Thu => "周四",
        Weekday::Fri => "周五",
        Weekday::Sat => "周六",
        Weekday::Sun => "周日",
    }
}
