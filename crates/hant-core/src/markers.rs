//! Paired Traditional/Simplified marker characters for the heuristic detector.
//!
//! Each pair holds a Traditional-only form and its Simplified counterpart.
//! Characters whose Simplified form is also an ordinary Traditional character
//! (后, 里, 发, 干, ...) are left out so that a match is unambiguous.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::script::Script;

/// `(traditional, simplified)` marker pairs.
pub const MARKER_PAIRS: &[(char, char)] = &[
    ('這', '这'), ('個', '个'), ('們', '们'), ('來', '来'), ('時', '时'), ('國', '国'),
    ('說', '说'), ('會', '会'), ('對', '对'), ('為', '为'), ('與', '与'), ('學', '学'),
    ('過', '过'), ('還', '还'), ('現', '现'), ('開', '开'), ('關', '关'), ('電', '电'),
    ('樣', '样'), ('問', '问'), ('題', '题'), ('長', '长'), ('門', '门'), ('見', '见'),
    ('東', '东'), ('車', '车'), ('書', '书'), ('實', '实'), ('點', '点'), ('種', '种'),
    ('經', '经'), ('無', '无'), ('從', '从'), ('當', '当'), ('動', '动'), ('進', '进'),
    ('體', '体'), ('麼', '么'), ('頭', '头'), ('話', '话'), ('讓', '让'), ('機', '机'),
    ('氣', '气'), ('愛', '爱'), ('歡', '欢'), ('錢', '钱'), ('買', '买'), ('賣', '卖'),
    ('聽', '听'), ('寫', '写'), ('讀', '读'), ('認', '认'), ('識', '识'), ('號', '号'),
    ('區', '区'), ('華', '华'), ('業', '业'), ('場', '场'), ('廣', '广'), ('處', '处'),
    ('報', '报'), ('應', '应'), ('歲', '岁'), ('陽', '阳'), ('隊', '队'), ('難', '难'),
    ('飛', '飞'), ('馬', '马'), ('鳥', '鸟'), ('魚', '鱼'), ('龍', '龙'), ('齊', '齐'),
    ('億', '亿'), ('邊', '边'), ('島', '岛'), ('帶', '带'), ('條', '条'), ('極', '极'),
    ('標', '标'), ('樂', '乐'), ('歷', '历'), ('產', '产'), ('線', '线'), ('結', '结'),
    ('給', '给'), ('網', '网'), ('總', '总'), ('義', '义'), ('習', '习'), ('聲', '声'),
    ('腦', '脑'), ('觀', '观'), ('計', '计'), ('記', '记'), ('設', '设'), ('許', '许'),
    ('試', '试'), ('測', '测'), ('語', '语'), ('誰', '谁'), ('請', '请'), ('調', '调'),
    ('談', '谈'), ('變', '变'), ('員', '员'), ('間', '间'), ('將', '将'), ('傳', '传'),
    ('雖', '虽'), ('藝', '艺'), ('術', '术'), ('驗', '验'), ('歸', '归'), ('圖', '图'),
    ('園', '园'), ('團', '团'), ('紅', '红'), ('綠', '绿'), ('藍', '蓝'), ('黃', '黄'),
    ('飯', '饭'), ('館', '馆'), ('醫', '医'), ('藥', '药'), ('銀', '银'), ('鐵', '铁'),
    ('聯', '联'), ('軍', '军'), ('農', '农'), ('辦', '办'), ('師', '师'), ('傷', '伤'),
    ('錯', '错'), ('壓', '压'), ('權', '权'), ('輕', '轻'), ('視', '视'), ('覺', '觉'),
    ('親', '亲'), ('貝', '贝'), ('負', '负'), ('貨', '货'), ('質', '质'), ('費', '费'),
    ('資', '资'), ('賽', '赛'), ('轉', '转'), ('輪', '轮'), ('運', '运'), ('達', '达'),
    ('遠', '远'), ('適', '适'), ('選', '选'), ('遺', '遗'), ('鄉', '乡'), ('陳', '陈'),
    ('險', '险'), ('隨', '随'), ('雙', '双'), ('雞', '鸡'), ('離', '离'), ('靜', '静'),
    ('韓', '韩'), ('頁', '页'), ('順', '顺'), ('預', '预'), ('領', '领'), ('頻', '频'),
    ('顏', '颜'), ('風', '风'), ('養', '养'), ('驚', '惊'), ('黨', '党'), ('齒', '齿'),
];

fn index() -> &'static HashMap<char, Script> {
    static INDEX: OnceLock<HashMap<char, Script>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::with_capacity(MARKER_PAIRS.len() * 2);
        for &(trad, simp) in MARKER_PAIRS {
            map.insert(trad, Script::Traditional);
            map.insert(simp, Script::Simplified);
        }
        map
    })
}

/// Which marker set `c` belongs to, if any.
pub fn classify(c: char) -> Option<Script> {
    index().get(&c).copied()
}

/// Traditional-only marker characters, in pair order.
pub fn traditional_markers() -> impl Iterator<Item = char> {
    MARKER_PAIRS.iter().map(|&(t, _)| t)
}

/// Simplified marker characters, in pair order.
pub fn simplified_markers() -> impl Iterator<Item = char> {
    MARKER_PAIRS.iter().map(|&(_, s)| s)
}

/// Per-set marker hit counts for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MarkerCounts {
    pub traditional: usize,
    pub simplified: usize,
}

impl MarkerCounts {
    pub fn total(&self) -> usize {
        self.traditional + self.simplified
    }
}

pub fn count_markers(text: &str) -> MarkerCounts {
    let mut counts = MarkerCounts::default();
    for c in text.chars() {
        match classify(c) {
            Some(Script::Traditional) => counts.traditional += 1,
            Some(Script::Simplified) => counts.simplified += 1,
            None => {}
        }
    }
    counts
}
