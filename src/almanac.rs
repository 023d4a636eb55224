//! Almanac annotations: daily 宜忌, Tibetan day quality and 九宫飞星.
//!
//! All three are fixed arithmetic rules over the date numbers, not
//! derivations from a traditional almanac.

use crate::festival::{CalendarType, festival_on};
use crate::lunar::LunarDate;
use crate::prelude::*;
use crate::tibetan::{is_doubleday, is_missing_day, special_day_description};
use serde::Serialize;

const YI: [&str; 36] = [
    "祭祀", "祈福", "求嗣", "开光", "出行", "解除", "纳采", "冠笄", "嫁娶", "纳婿", "安床", "移徙",
    "入宅", "安香", "拆卸", "动土", "挂匾", "开市", "立券", "纳财", "沐浴", "理发", "安门", "修造",
    "盖屋", "合脊", "起基", "定磉", "安碓硙", "放水", "掘井", "破土", "安葬", "启钻", "除服", "成服",
];

const JI: [&str; 18] = [
    "嫁娶", "安葬", "出行", "动土", "开市", "入宅", "移徙", "祭祀", "祈福", "开光", "纳采", "安床",
    "拆卸", "掘井", "破土", "作灶", "伐木", "探病",
];

const YI_PER_DAY: usize = 5;
const YI_STRIDE: usize = 3;
const JI_PER_DAY: usize = 4;
const JI_STRIDE: usize = 5;

/// Activities favoured (宜) and avoided (忌) on a lunar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YiJi {
    pub yi: [&'static str; YI_PER_DAY],
    pub ji: [&'static str; JI_PER_DAY],
}

fn pick<const N: usize>(list: &[&'static str], start: usize, stride: usize) -> [&'static str; N] {
    std::array::from_fn(|i| list[(start + i * stride) % list.len()])
}

/// 宜忌 of a lunar date. 宜 follows the day of month, 忌 the month.
pub fn daily_yi_ji(date: &LunarDate) -> YiJi {
    let day = usize::from(date.day().saturating_sub(1));
    let month = usize::from(date.month().saturating_sub(1));
    YiJi {
        yi: pick(&YI, day % YI.len(), YI_STRIDE),
        ji: pick(&JI, month % JI.len(), JI_STRIDE),
    }
}

/// Five-step auspiciousness scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayQuality {
    #[display(fmt = "大吉")]
    VeryGood,
    #[display(fmt = "吉")]
    Good,
    #[display(fmt = "平")]
    Neutral,
    #[display(fmt = "小凶")]
    SlightlyBad,
    #[display(fmt = "凶")]
    Bad,
}

impl DayQuality {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::VeryGood => "✨",
            Self::Good => "✅",
            Self::Neutral => "➖",
            Self::SlightlyBad => "⚠️",
            Self::Bad => "❌",
        }
    }
}

/// Quality of a Tibetan day with a short description.
///
/// Checked in order: special days are very good, festival days good,
/// missing days bad and doubled days neutral. Other days cycle through the
/// scale by `(year + month + day) % 5`.
///
/// ```
/// use lunar_tibetan::{DayQuality, day_quality};
///
/// assert_eq!(day_quality(2026, 1, 8).0, DayQuality::VeryGood);
/// assert_eq!(day_quality(2026, 1, 3), (DayQuality::Good, "麦朵切，吉祥日".to_owned()));
/// ```
pub fn day_quality(year: i32, month: u8, day: u8) -> (DayQuality, String) {
    if special_day_description(day).is_some() {
        return (DayQuality::VeryGood, "殊胜日，诸事皆宜".to_owned());
    }
    if let Some(festival) = festival_on(CalendarType::Tibetan, month, day) {
        return (DayQuality::Good, format!("{}，吉祥日", festival.name));
    }
    if is_missing_day(year, month, day) {
        return (DayQuality::Bad, "缺日，不宜重大事项".to_owned());
    }
    if is_doubleday(year, month, day) {
        return (DayQuality::Neutral, "重日".to_owned());
    }
    let quality = match (year + i32::from(month) + i32::from(day)).rem_euclid(5) {
        0 => DayQuality::VeryGood,
        1 => DayQuality::Good,
        2 => DayQuality::Neutral,
        3 => DayQuality::SlightlyBad,
        _ => DayQuality::Bad,
    };
    (quality, quality.to_string())
}

const STAR_DIRECTIONS: [&str; 9] = ["北方", "西南", "东方", "东南", "中央", "西北", "西方", "东北", "南方"];
const STAR_MEANINGS: [&str; 9] = [
    "一白贪狼 - 喜庆、人缘",
    "二黑巨门 - 病符、健康",
    "三碧禄存 - 是非、官灾",
    "四绿文曲 - 文昌、学业",
    "五黄廉贞 - 煞气、灾祸",
    "六白武曲 - 偏财、贵人",
    "七赤破军 - 口舌、破财",
    "八白左辅 - 正财、置业",
    "九紫右弼 - 喜庆、姻缘",
];

/// The ruling star of the nine palaces for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FlyingStar {
    /// `1..=9`
    pub star: u8,
    pub direction: &'static str,
    pub meaning: &'static str,
}

/// 九宫飞星 of a date: star `(year + month + day) % 9 + 1`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn flying_star(year: i32, month: u8, day: u8) -> FlyingStar {
    let idx = (year + month as i32 + day as i32).rem_euclid(9) as usize;
    FlyingStar {
        star: idx as u8 + 1,
        direction: STAR_DIRECTIONS[idx],
        meaning: STAR_MEANINGS[idx],
    }
}
