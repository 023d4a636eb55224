//! Static festival catalog.

use crate::consts::MAX_YEAR;
use crate::lunar::lunar_to_solar;
use crate::prelude::*;
use crate::solar_term::solar_term_date;
use crate::tibetan::tibetan_to_solar;
use crate::{CalendarError, SolarDate};
use serde::{Deserialize, Serialize};

/// Calendar a festival date (or a lunar-style day) is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    #[display(fmt = "solar")]
    Solar,
    #[display(fmt = "lunar")]
    Lunar,
    #[display(fmt = "tibetan")]
    Tibetan,
}

impl CalendarType {
    pub const ALL: [Self; 3] = [Self::Solar, Self::Lunar, Self::Tibetan];

    /// Chinese name of the calendar
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Solar => "公历",
            Self::Lunar => "农历",
            Self::Tibetan => "藏历",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FestivalType {
    #[display(fmt = "传统节日")]
    Traditional,
    #[display(fmt = "佛教节日")]
    Buddhist,
    #[display(fmt = "国家节日")]
    National,
    #[display(fmt = "节气")]
    SolarTerm,
    #[display(fmt = "自定义")]
    Custom,
}

/// A festival on a fixed month and day of one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Festival {
    /// Unique, stable identifier such as `lunar-spring-festival`
    pub id: &'static str,
    /// Chinese name
    pub name: &'static str,
    /// Name in the festival's own script, for Tibetan festivals
    pub native_name: Option<&'static str>,
    /// Month in the festival's own calendar
    pub month: u8,
    /// Day in the festival's own calendar. Nominal for solar terms, whose
    /// date moves from year to year.
    pub day: u8,
    pub calendar_type: CalendarType,
    pub festival_type: FestivalType,
    /// Short Chinese description
    pub description: Option<&'static str>,
}

impl Festival {
    const fn solar(
        id: &'static str,
        name: &'static str,
        month: u8,
        day: u8,
        festival_type: FestivalType,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            native_name: None,
            month,
            day,
            calendar_type: CalendarType::Solar,
            festival_type,
            description: Some(description),
        }
    }

    const fn lunar(
        id: &'static str,
        name: &'static str,
        month: u8,
        day: u8,
        festival_type: FestivalType,
        description: &'static str,
    ) -> Self {
        Self {
            calendar_type: CalendarType::Lunar,
            ..Self::solar(id, name, month, day, festival_type, description)
        }
    }

    const fn tibetan(
        id: &'static str,
        name: &'static str,
        native_name: &'static str,
        month: u8,
        day: u8,
        festival_type: FestivalType,
        description: &'static str,
    ) -> Self {
        Self {
            native_name: Some(native_name),
            calendar_type: CalendarType::Tibetan,
            ..Self::solar(id, name, month, day, festival_type, description)
        }
    }

    /// Gregorian date the festival falls on in `year` of its own calendar.
    ///
    /// Lunar festivals resolve through the lunar year table, Tibetan ones
    /// through the one-month offset. Solar-term festivals use the computed
    /// term date rather than their nominal month and day.
    ///
    /// # Errors
    /// Fails when the year is outside the calendar's supported range, or the
    /// day does not exist that year (e.g. 除夕 on the 30th of a 29-day 腊月).
    pub fn solar_date_in(&self, year: i32) -> Result<SolarDate, CalendarError> {
        match self.calendar_type {
            CalendarType::Solar if self.festival_type == FestivalType::SolarTerm => {
                solar_term_date(year, self.name)
            }
            CalendarType::Solar => {
                let solar_year = u16::try_from(year).map_err(|_| CalendarError::YearOutOfRange {
                    year,
                    min: 1,
                    max: i32::from(MAX_YEAR),
                })?;
                SolarDate::new(solar_year, self.month, self.day)
            }
            CalendarType::Lunar => lunar_to_solar(year, self.month, self.day, false),
            CalendarType::Tibetan => tibetan_to_solar(year, self.month, self.day),
        }
    }
}

use FestivalType::{Buddhist, National, SolarTerm, Traditional};

#[rustfmt::skip]
static CATALOG: [Festival; 43] = [
    Festival::solar("solar-new-year", "元旦", 1, 1, National, "公历新年"),
    Festival::solar("solar-labour-day", "劳动节", 5, 1, National, "国际劳动节"),
    Festival::solar("solar-national-day", "国庆节", 10, 1, National, "中华人民共和国国庆节"),
    Festival::solar("lunar-dongzhi", "冬至", 12, 22, SolarTerm, "二十四节气之一"),

    Festival::lunar("lunar-spring-festival", "春节", 1, 1, Traditional, "农历新年，最重要的传统节日"),
    Festival::lunar("lunar-lantern-festival", "元宵节", 1, 15, Traditional, "正月十五，又称上元节"),
    Festival::lunar("lunar-dragon-head", "龙抬头", 2, 2, Traditional, "二月二，青龙节"),
    Festival::lunar("lunar-shangsi", "上巳节", 3, 3, Traditional, "三月三"),
    Festival::lunar("lunar-buddha-birthday", "佛诞日", 4, 8, Buddhist, "四月初八，释迦牟尼佛诞辰"),
    Festival::lunar("lunar-dragon-boat-festival", "端午节", 5, 5, Traditional, "五月初五"),
    Festival::lunar("lunar-qixi", "七夕节", 7, 7, Traditional, "七月初七，中国情人节"),
    Festival::lunar("lunar-ghost-festival", "中元节", 7, 15, Traditional, "七月十五，鬼节"),
    Festival::lunar("lunar-mid-autumn-festival", "中秋节", 8, 15, Traditional, "八月十五"),
    Festival::lunar("lunar-double-ninth-festival", "重阳节", 9, 9, Traditional, "九月初九"),
    Festival::lunar("lunar-xiayuan", "下元节", 10, 15, Traditional, "十月十五"),
    Festival::lunar("lunar-laba-festival", "腊八节", 12, 8, Traditional, "腊月初八"),
    Festival::lunar("lunar-new-year-eve", "除夕", 12, 30, Traditional, "腊月最后一天"),

    Festival::tibetan("tibetan-1-1", "藏历新年", "ལོ་གསར", 1, 1, Traditional, "藏族最重要的传统节日，庆祝新的一年开始"),
    Festival::tibetan("tibetan-1-3", "麦朵切", "སྨོན་ལམ་ཆེན་པོ", 1, 3, Traditional, "拉萨大昭寺传召大法会开始"),
    Festival::tibetan("tibetan-1-8", "神变节", "ཆོ་འཕྲུལ་དུས་ཆེན", 1, 8, Traditional, "佛陀示现神变的日子"),
    Festival::tibetan("tibetan-1-15", "酥油花灯节", "ཆོས་འཁོར་དུས་ཆེན", 1, 15, Traditional, "正月十五，纪念佛陀示现神变，展出酥油花"),
    Festival::tibetan("tibetan-1-25", "正月末", "དང་པོའི་མཇུག", 1, 25, Traditional, "正月最后一个殊胜日"),
    Festival::tibetan("tibetan-2-15", "二月十五", "ཟླ་གཉིས་པའི་བཅོ་ལྔ", 2, 15, Traditional, "春季重要的佛教节日"),
    Festival::tibetan("tibetan-3-15", "三月十五", "ཟླ་གསུམ་པའི་བཅོ་ལྔ", 3, 15, Traditional, "时轮金刚灌顶纪念日"),
    Festival::tibetan("tibetan-4-7", "佛陀诞辰", "སྐུ་བལྟམས་པའི་དུས་ཆེན", 4, 7, Buddhist, "佛陀诞生"),
    Festival::tibetan("tibetan-4-15", "萨迦达瓦", "ས་ག་ཟླ་བ", 4, 15, Buddhist, "佛诞、成道、涅槃三节合一，藏历最殊胜日"),
    Festival::tibetan("tibetan-4-25", "四月末", "ས་གའི་མཇུག", 4, 25, Traditional, "萨迦达瓦月最后一个殊胜日"),
    Festival::tibetan("tibetan-4-15-dharma-wheel", "佛陀转法轮日", "ཆོས་འཁོར་གྱི་དུས་ཆེན", 4, 15, Buddhist, "佛陀初转法轮纪念日"),
    Festival::tibetan("tibetan-6-4", "佛陀初转法轮", "ཆོས་འཁོར་དང་པོ", 6, 4, Buddhist, "佛陀在鹿野苑初转法轮"),
    Festival::tibetan("tibetan-6-15", "六月十五", "ཟླ་དྲུག་པའི་བཅོ་ལྔ", 6, 15, Traditional, "夏季重要节日"),
    Festival::tibetan("tibetan-6-30", "雪顿节", "ཞོ་སྟོན", 6, 30, Traditional, "吃酸奶的节日，藏戏表演"),
    Festival::tibetan("tibetan-7-15", "七月十五", "ཟླ་བདུན་པའི་བཅོ་ལྔ", 7, 15, Traditional, "秋季开始"),
    Festival::tibetan("tibetan-8-3", "八月节", "ཟླ་བརྒྱད་པ", 8, 3, Traditional, "丰收季节"),
    Festival::tibetan("tibetan-8-15", "八月十五", "ཟླ་བརྒྱད་པའི་བཅོ་ལྔ", 8, 15, Traditional, "中秋节 (与农历相同)"),
    Festival::tibetan("tibetan-9-15", "九月十五", "ཟླ་དགུ་པའི་བཅོ་ལྔ", 9, 15, Traditional, "秋季重要节日"),
    Festival::tibetan("tibetan-9-22", "佛陀天降日", "ལྷ་བབས་དུས་ཆེན", 9, 22, Buddhist, "佛陀从三十三天返回人间"),
    Festival::tibetan("tibetan-10-15", "十月十五", "ཟླ་བཅུ་པའི་བཅོ་ལྔ", 10, 15, Traditional, "宗喀巴大师圆寂纪念日前夕"),
    Festival::tibetan("tibetan-10-25", "燃灯节", "དགའ་ལྡན་ལྔ་མཆོད", 10, 25, Traditional, "宗喀巴大师圆寂纪念日，点灯供养"),
    Festival::tibetan("tibetan-11-15", "十一月十五", "ཟླ་བཅུ་གཅིག་པའི་བཅོ་ལྔ", 11, 15, Traditional, "冬季重要节日"),
    Festival::tibetan("tibetan-11-29", "驱鬼节", "གླིང་རས་ཆེན་པོ", 11, 29, Traditional, "年终驱鬼仪式"),
    Festival::tibetan("tibetan-12-15", "十二月十五", "ཟླ་བཅུ་གཉིས་པའི་བཅོ་ལྔ", 12, 15, Traditional, "年终准备"),
    Festival::tibetan("tibetan-12-29", "除夕", "ལོ་མཇུག", 12, 29, Traditional, "藏历年前夜，驱鬼除旧"),
    Festival::tibetan("tibetan-12-30", "除夕夜", "ལོ་རྙིང་མཇུག་རྫོགས", 12, 30, Traditional, "旧年最后一天"),
];

/// All festivals of one calendar, in catalog order.
pub fn festivals(calendar: CalendarType) -> impl Iterator<Item = &'static Festival> {
    CATALOG.iter().filter(move |f| f.calendar_type == calendar)
}

/// Festivals of one calendar in the given month, in catalog order.
pub fn festivals_for(calendar: CalendarType, month: u8) -> Vec<&'static Festival> {
    festivals(calendar).filter(|f| f.month == month).collect()
}

/// First festival of the calendar on the given month and day.
pub fn festival_on(calendar: CalendarType, month: u8, day: u8) -> Option<&'static Festival> {
    festivals(calendar).find(|f| f.month == month && f.day == day)
}

/// Festival with the given id.
pub fn festival_by_id(id: &str) -> Option<&'static Festival> {
    CATALOG.iter().find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = CATALOG.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_dates_are_plausible() {
        for f in &CATALOG {
            assert!((1..=12).contains(&f.month), "{}", f.id);
            assert!((1..=30).contains(&f.day), "{}", f.id);
            assert!(f.description.is_some_and(|d| !d.is_empty()), "{}", f.id);
            assert_eq!(f.native_name.is_some(), f.calendar_type == CalendarType::Tibetan, "{}", f.id);
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(festivals(CalendarType::Solar).count(), 4);
        assert_eq!(festivals(CalendarType::Lunar).count(), 13);
        assert_eq!(festivals(CalendarType::Tibetan).count(), 26);
    }

    #[test]
    fn test_spring_festival() {
        let names: Vec<&str> = festivals_for(CalendarType::Lunar, 1).iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["春节", "元宵节"]);

        let spring = festival_on(CalendarType::Lunar, 1, 1).unwrap();
        assert_eq!(spring.id, "lunar-spring-festival");
        assert_eq!(spring.festival_type, FestivalType::Traditional);
    }

    #[test]
    fn test_losar() {
        let first = festivals_for(CalendarType::Tibetan, 1);
        assert_eq!(first.len(), 5);
        assert!(first.iter().any(|f| f.native_name == Some("ལོ་གསར") && f.name == "藏历新年"));
    }

    #[test]
    fn test_tibetan_month_4_keeps_catalog_order() {
        let days: Vec<u8> = festivals_for(CalendarType::Tibetan, 4).iter().map(|f| f.day).collect();
        assert_eq!(days, vec![7, 15, 25, 15]);
        assert_eq!(festival_on(CalendarType::Tibetan, 4, 15).unwrap().name, "萨迦达瓦");
    }

    #[test]
    fn test_festival_types() {
        assert_eq!(festival_by_id("lunar-buddha-birthday").unwrap().festival_type, FestivalType::Buddhist);
        assert_eq!(festival_by_id("tibetan-9-22").unwrap().festival_type, FestivalType::Buddhist);
        assert_eq!(festival_by_id("tibetan-6-30").unwrap().festival_type, FestivalType::Traditional);
        let dongzhi = festival_by_id("lunar-dongzhi").unwrap();
        assert_eq!(dongzhi.calendar_type, CalendarType::Solar);
        assert_eq!(dongzhi.festival_type, FestivalType::SolarTerm);
        assert_eq!(dongzhi.festival_type.to_string(), "节气");
        assert!(festival_by_id("missing").is_none());
    }

    #[test]
    fn test_empty_months() {
        assert!(festivals_for(CalendarType::Lunar, 6).is_empty());
        assert!(festivals_for(CalendarType::Tibetan, 5).is_empty());
        assert!(festival_on(CalendarType::Lunar, 1, 2).is_none());
        assert!(festivals_for(CalendarType::Lunar, 13).is_empty());
    }

    #[test]
    fn test_solar_date_in() {
        let spring = festival_by_id("lunar-spring-festival").unwrap();
        assert_eq!(spring.solar_date_in(2024).unwrap(), SolarDate::new(2024, 2, 10).unwrap());
        assert!(spring.solar_date_in(2101).unwrap_err().is_out_of_range());

        let mid_autumn = festival_by_id("lunar-mid-autumn-festival").unwrap();
        assert_eq!(mid_autumn.solar_date_in(2024).unwrap(), SolarDate::new(2024, 9, 17).unwrap());

        let dongzhi = festival_by_id("lunar-dongzhi").unwrap();
        assert_eq!(dongzhi.solar_date_in(2024).unwrap(), SolarDate::new(2024, 12, 21).unwrap());
        assert_eq!(dongzhi.solar_date_in(2023).unwrap(), SolarDate::new(2023, 12, 22).unwrap());
        assert!(dongzhi.solar_date_in(2101).unwrap_err().is_out_of_range());

        let national = festival_by_id("solar-national-day").unwrap();
        assert_eq!(national.solar_date_in(2026).unwrap(), SolarDate::new(2026, 10, 1).unwrap());
        assert!(national.solar_date_in(-1).is_err());

        let losar = festival_by_id("tibetan-1-1").unwrap();
        assert_eq!(losar.solar_date_in(2026).unwrap(), SolarDate::new(2026, 2, 1).unwrap());
        let year_end = festival_by_id("tibetan-12-30").unwrap();
        assert_eq!(year_end.solar_date_in(2025).unwrap(), SolarDate::new(2026, 1, 30).unwrap());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(festival_by_id("tibetan-1-1").unwrap()).unwrap();
        assert_eq!(json["calendar_type"], "tibetan");
        assert_eq!(json["festival_type"], "traditional");
        assert_eq!(json["native_name"], "ལོ་གསར");
    }
}
