//! Name tables for lunar and Tibetan dates.

use crate::SolarDate;
use crate::consts::{LEAP_MONTH_MARKER, SEXAGENARY_DAY_EPOCH, SEXAGENARY_EPOCH, TIBETAN_CYCLE_EPOCH};

pub(crate) const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
pub(crate) const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
pub(crate) const ZODIAC: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

const LUNAR_MONTHS: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

/// Day names, `初一` to `三十`.
const LUNAR_DAYS: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

const ELEMENTS: [&str; 5] = ["木", "火", "土", "金", "水"];
const ELEMENTS_TIBETAN: [&str; 5] = ["ཤིང་", "མེ་", "ས་", "ལྕགས་", "ཆུ་"];
const ZODIAC_TIBETAN: [&str; 12] = [
    "བྱི་བ", "གླང་", "སྟག", "ཡོས", "འབྲུག", "སྦྲུལ", "རྟ", "ལུག", "སྤྲེལ", "བྱ", "ཁྱི", "ཕག",
];

const TIBETAN_MONTHS_CHINESE: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月", "十二月",
];
const TIBETAN_MONTHS: [&str; 12] = [
    "ཧོར་ཟླ་དང་པོ",
    "ཧོར་ཟླ་གཉིས་པ",
    "ཧོར་ཟླ་གསུམ་པ",
    "ཧོར་ཟླ་བཞི་པ",
    "ཧོར་ཟླ་ལྔ་པ",
    "ཧོར་ཟླ་དྲུག་པ",
    "ཧོར་ཟླ་བདུན་པ",
    "ཧོར་ཟླ་བརྒྱད་པ",
    "ཧོར་ཟླ་དགུ་པ",
    "ཧོར་ཟླ་བཅུ་པ",
    "ཧོར་ཟླ་བཅུ་གཅིག་པ",
    "ཧོར་ཟླ་བཅུ་གཉིས་པ",
];
const TIBETAN_DAYS: [&str; 30] = [
    "གཅིག",
    "གཉིས",
    "གསུམ",
    "བཞི",
    "ལྔ",
    "དྲུག",
    "བདུན",
    "བརྒྱད",
    "དགུ",
    "བཅུ",
    "བཅུ་གཅིག",
    "བཅུ་གཉིས",
    "བཅུ་གསུམ",
    "བཅུ་བཞི",
    "བཅོ་ལྔ",
    "བཅུ་དྲུག",
    "བཅུ་བདུན",
    "བཅུ་བརྒྱད",
    "བཅུ་དགུ",
    "ཉི་ཤུ",
    "ཉེར་གཅིག",
    "ཉེར་གཉིས",
    "ཉེར་གསུམ",
    "ཉེར་བཞི",
    "ཉེར་ལྔ",
    "ཉེར་དྲུག",
    "ཉེར་བདུན",
    "ཉེར་བརྒྱད",
    "ཉེར་དགུ",
    "སུམ་ཅུ",
];

#[allow(clippy::cast_sign_loss)]
const fn cycle_index(year: i32, epoch: i32, len: i32) -> usize {
    (year - epoch).rem_euclid(len) as usize
}

/// Sexagenary (干支) name of a year.
///
/// ```
/// assert_eq!(lunar_tibetan::stem_branch(1984), "甲子");
/// assert_eq!(lunar_tibetan::stem_branch(2025), "乙巳");
/// ```
pub fn stem_branch(year: i32) -> String {
    let stem = STEMS[cycle_index(year, SEXAGENARY_EPOCH, 10)];
    let branch = BRANCHES[cycle_index(year, SEXAGENARY_EPOCH, 12)];
    stem.to_owned() + branch
}

/// Sexagenary (干支) name of a Gregorian day.
///
/// ```
/// use lunar_tibetan::{SolarDate, day_stem_branch};
///
/// assert_eq!(day_stem_branch(SolarDate::new(2000, 1, 7).unwrap()), "甲子");
/// ```
pub fn day_stem_branch(date: SolarDate) -> String {
    let idx = cycle_index(date.jdn(), SEXAGENARY_DAY_EPOCH, 60);
    STEMS[idx % 10].to_owned() + BRANCHES[idx % 12]
}

/// Heavenly stem index of a Gregorian day, `0` for 甲.
pub(crate) const fn day_stem(jdn: i32) -> usize {
    cycle_index(jdn, SEXAGENARY_DAY_EPOCH, 10)
}

/// Zodiac animal of a year, aligned with its earthly branch.
///
/// ```
/// assert_eq!(lunar_tibetan::zodiac(2024), "龙");
/// ```
pub const fn zodiac(year: i32) -> &'static str {
    ZODIAC[cycle_index(year, SEXAGENARY_EPOCH, 12)]
}

/// Month name, `正月` through `腊月`, prefixed with `闰` for leap months.
///
/// # Panics
/// Panics if `month` is not in `1..=12`.
pub(crate) fn lunar_month_name(month: u8, is_leap: bool) -> String {
    let name = LUNAR_MONTHS[usize::from(month) - 1];
    if is_leap {
        LEAP_MONTH_MARKER.to_owned() + name
    } else {
        name.to_owned()
    }
}

/// Day name, `初一` through `三十`. `None` outside `1..=30`.
pub(crate) fn lunar_day_name(day: u8) -> Option<&'static str> {
    LUNAR_DAYS.get(usize::from(day).checked_sub(1)?).copied()
}

/// Element of a Tibetan year as `(chinese, tibetan)`.
pub(crate) const fn tibetan_element(year: i32) -> (&'static str, &'static str) {
    let idx = cycle_index(year, TIBETAN_CYCLE_EPOCH, 10) / 2;
    (ELEMENTS[idx], ELEMENTS_TIBETAN[idx])
}

/// Animal of a Tibetan year as `(chinese, tibetan)`.
pub(crate) const fn tibetan_zodiac(year: i32) -> (&'static str, &'static str) {
    let idx = cycle_index(year, TIBETAN_CYCLE_EPOCH, 12);
    (ZODIAC[idx], ZODIAC_TIBETAN[idx])
}

/// Tibetan month name as `(chinese, tibetan)`.
///
/// # Panics
/// Panics if `month` is not in `1..=12`.
pub(crate) fn tibetan_month_name(month: u8) -> (&'static str, &'static str) {
    let idx = usize::from(month) - 1;
    (TIBETAN_MONTHS_CHINESE[idx], TIBETAN_MONTHS[idx])
}

/// Tibetan-script day name. `None` outside `1..=30`.
pub(crate) fn tibetan_day_name(day: u8) -> Option<&'static str> {
    TIBETAN_DAYS.get(usize::from(day).checked_sub(1)?).copied()
}
