//! The church year as observed by the ELCA.
//!
//! Every movable date of the year is derived from a small set of anchors
//! (Epiphany, Easter, Advent, ...), computed once per calendar year. Sundays
//! are labelled in two passes: the season ranges first, then single feasts
//! overriding them, both in a fixed order where the later write wins. A final
//! pass numbers the Sundays after Pentecost backwards from Christ the King,
//! since the length of that season depends on the date of Easter.
//!
//! Labels carry the liturgical colour (🅦 white, 🅖 green, 🅟 purple, 🅡 red,
//! 🅑 blue, 🅢 scarlet) and the lectionary year marker (🄰, 🄱, 🄲).

use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use std::fmt::{self, Display, Formatter};

use crate::calendar::{check_year, easter_date, make_date, sunday_on_or_after, CalendarError};
use crate::event::CalendarEvent;

/// First year the generator supports, lectionary year A began in Advent 1992
pub const FIRST_YEAR: i32 = 1992;

/// Lectionary number of the last Sunday after Pentecost before Christ the King
const LAST_LECTIONARY: u32 = 33;

/// Year of the three year Revised Common Lectionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LectionaryYear {
    A,
    B,
    C,
}

impl LectionaryYear {
    /// Lectionary year beginning with Advent of `year`
    pub fn starting_in(year: i32) -> LectionaryYear {
        match (year - FIRST_YEAR).rem_euclid(3) {
            0 => LectionaryYear::A,
            1 => LectionaryYear::B,
            _ => LectionaryYear::C,
        }
    }
}

impl Display for LectionaryYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LectionaryYear::A => write!(f, "🄰"),
            LectionaryYear::B => write!(f, "🄱"),
            LectionaryYear::C => write!(f, "🄲"),
        }
    }
}

/// English ordinal suffix for the small numbers used in Sunday labels
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n {
        1 | 21 | 31 => "st",
        2 | 22 | 32 => "nd",
        3 | 23 | 33 => "rd",
        _ => "th",
    }
}

/// Reference dates all other movable dates are offsets of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// January 6th
    Epiphany,
    /// Sunday on or after January 7th, the Baptism of our Lord
    AfterEpiphany,
    Easter,
    /// First Sunday in Lent
    Lent,
    Pentecost,
    /// Sunday on or after November 20th
    ChristTheKing,
    /// First Sunday of Advent, on or after November 27th
    Advent,
    /// December 25th
    Christmas,
    /// Sunday on or after December 26th
    AfterChristmas,
    /// Sunday on or after December 26th of the previous year
    PreviousAfterChristmas,
    /// A Sunday between January 2nd and 5th, missing in most years
    SecondAfterChristmas,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSet {
    epiphany: NaiveDate,
    after_epiphany: NaiveDate,
    easter: NaiveDate,
    pentecost: NaiveDate,
    christ_the_king: NaiveDate,
    advent: NaiveDate,
    christmas: NaiveDate,
    after_christmas: NaiveDate,
    previous_after_christmas: NaiveDate,
    second_after_christmas: Option<NaiveDate>,
}

impl AnchorSet {
    pub fn new(year: i32) -> Result<AnchorSet, CalendarError> {
        let easter = easter_date(year)?;
        Ok(AnchorSet {
            epiphany: make_date(year, 1, 6)?,
            after_epiphany: sunday_on_or_after(1, 7, year)?,
            easter,
            pentecost: easter + Duration::days(49),
            christ_the_king: sunday_on_or_after(11, 20, year)?,
            advent: sunday_on_or_after(11, 27, year)?,
            christmas: make_date(year, 12, 25)?,
            after_christmas: sunday_on_or_after(12, 26, year)?,
            previous_after_christmas: sunday_on_or_after(12, 26, year - 1)?,
            second_after_christmas: second_sunday_after_christmas(year)?,
        })
    }

    pub fn get(&self, anchor: Anchor) -> Option<NaiveDate> {
        match anchor {
            Anchor::Epiphany => Some(self.epiphany),
            Anchor::AfterEpiphany => Some(self.after_epiphany),
            Anchor::Easter => Some(self.easter),
            Anchor::Lent => Some(self.easter - Duration::days(42)),
            Anchor::Pentecost => Some(self.pentecost),
            Anchor::ChristTheKing => Some(self.christ_the_king),
            Anchor::Advent => Some(self.advent),
            Anchor::Christmas => Some(self.christmas),
            Anchor::AfterChristmas => Some(self.after_christmas),
            Anchor::PreviousAfterChristmas => Some(self.previous_after_christmas),
            Anchor::SecondAfterChristmas => self.second_after_christmas,
        }
    }
}

/// The 2nd Sunday after Christmas exists only if a Sunday falls between
/// January 2nd and 5th. With a Sunday on January 1st it is the 1st Sunday
/// after Christmas; from January 6th on, Epiphany has already passed.
pub fn second_sunday_after_christmas(year: i32) -> Result<Option<NaiveDate>, CalendarError> {
    let sunday = sunday_on_or_after(1, 2, year)?;
    if sunday.day() <= 5 {
        Ok(Some(sunday))
    } else {
        Ok(None)
    }
}

/// Seasons whose Sundays are numbered consecutively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    AfterEpiphany,
    Lent,
    Easter,
    AfterPentecost,
    Advent,
}

struct SeasonRange {
    season: Season,
    anchor: Anchor,
    /// Days from the anchor to the Sunday numbered 1
    offset: i64,
    first: u32,
    last: u32,
}

/// Ranges are applied in this order, later ranges overwrite earlier ones
const SEASON_RANGES: [SeasonRange; 5] = [
    SeasonRange {
        season: Season::AfterEpiphany,
        anchor: Anchor::AfterEpiphany,
        offset: 0,
        first: 2,
        last: 9,
    },
    SeasonRange {
        season: Season::Lent,
        anchor: Anchor::Lent,
        offset: 0,
        first: 1,
        last: 5,
    },
    SeasonRange {
        season: Season::Easter,
        anchor: Anchor::Easter,
        offset: 0,
        first: 2,
        last: 7,
    },
    SeasonRange {
        season: Season::AfterPentecost,
        anchor: Anchor::Pentecost,
        offset: 7,
        first: 2,
        last: 27,
    },
    SeasonRange {
        season: Season::Advent,
        anchor: Anchor::Advent,
        offset: 0,
        first: 1,
        last: 4,
    },
];

/// Which lectionary year marker a feast label carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    /// Lectionary year that started with Advent of the previous year
    Outgoing,
    /// Lectionary year that starts with Advent of this year
    Incoming,
    None,
}

struct Feast {
    anchor: Anchor,
    offset: i64,
    name: &'static str,
    marker: Marker,
}

const fn feast(anchor: Anchor, offset: i64, name: &'static str, marker: Marker) -> Feast {
    Feast {
        anchor,
        offset,
        name,
        marker,
    }
}

/// Single feasts, applied after the season ranges and in this order
const FEASTS: [Feast; 16] = [
    feast(Anchor::Epiphany, 0, "Epiphany 🅦", Marker::Outgoing),
    feast(Anchor::AfterEpiphany, 0, "Baptism of our Lord (Lectionary 1) 🅦", Marker::Outgoing),
    feast(Anchor::Lent, -4, "Ash Wednesday 🅟", Marker::Outgoing),
    feast(Anchor::Easter, -7, "Palm Sunday 🅢🅟", Marker::Outgoing),
    feast(Anchor::Easter, -3, "Maundy Thursday 🅢🅦", Marker::Outgoing),
    feast(Anchor::Easter, -2, "Good Friday", Marker::Outgoing),
    feast(Anchor::Easter, -1, "Easter Vigil", Marker::Outgoing),
    feast(Anchor::Easter, 0, "Resurrection of Our Lord 🅦", Marker::Outgoing),
    feast(Anchor::Easter, 39, "Ascension of the Lord 🅦", Marker::Outgoing),
    feast(Anchor::Pentecost, 0, "Day of Pentecost 🅡", Marker::Outgoing),
    feast(Anchor::Pentecost, 7, "The Holy Trinity 🅦", Marker::Outgoing),
    feast(Anchor::ChristTheKing, 0, "Christ the King (Lectionary 34) 🅦", Marker::Outgoing),
    feast(Anchor::Christmas, 0, "Nativity of Our Lord 🅦", Marker::None),
    feast(Anchor::PreviousAfterChristmas, 0, "1st Sunday after Christmas 🅦", Marker::Outgoing),
    feast(Anchor::SecondAfterChristmas, 0, "2nd Sunday after Christmas 🅦", Marker::Outgoing),
    feast(Anchor::AfterChristmas, 0, "1st Sunday after Christmas 🅦", Marker::Incoming),
];

/// Label written into a day of the year
#[derive(Debug, Clone, PartialEq)]
pub enum DayLabel {
    Text(String),
    /// Numbered after the fact, once the whole season is known
    AfterPentecost {
        number: u32,
        lectionary: Option<u32>,
        year: LectionaryYear,
    },
}

impl Display for DayLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Text(text) => write!(f, "{}", text),
            DayLabel::AfterPentecost {
                number,
                lectionary: Some(lectionary),
                year,
            } => write!(
                f,
                "{}{} Sunday after Pentecost (Lectionary {}) 🅖 {}",
                number,
                ordinal_suffix(*number),
                lectionary,
                year
            ),
            DayLabel::AfterPentecost {
                number,
                lectionary: None,
                year,
            } => write!(
                f,
                "{}{} Sunday after Pentecost 🅖 {}",
                number,
                ordinal_suffix(*number),
                year
            ),
        }
    }
}

/// Labels of one calendar year, one slot per day
#[derive(Debug, Clone, PartialEq)]
pub struct DayLabels {
    first_day: NaiveDate,
    slots: Vec<Option<DayLabel>>,
}

impl DayLabels {
    fn new(year: i32) -> Result<DayLabels, CalendarError> {
        let first_day = make_date(year, 1, 1)?;
        let days = make_date(year, 12, 31)?.ordinal() as usize;
        Ok(DayLabels {
            first_day,
            slots: vec![None; days],
        })
    }

    fn index(&self, date: NaiveDate) -> Option<usize> {
        if date.year() == self.first_day.year() {
            Some(date.ordinal0() as usize)
        } else {
            None
        }
    }

    /// Overwrite the label of a day, dates outside of the year are ignored
    pub fn set(&mut self, date: NaiveDate, label: DayLabel) -> bool {
        match self.index(date) {
            Some(idx) => {
                self.slots[idx] = Some(label);
                true
            }
            None => {
                debug!("skipping {} outside of {}: {}", date, self.first_day.year(), label);
                false
            }
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayLabel> {
        self.index(date).and_then(|idx| self.slots[idx].as_ref())
    }

    /// All labelled days in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &DayLabel)> + '_ {
        self.slots.iter().enumerate().filter_map(move |(idx, label)| {
            label
                .as_ref()
                .map(|label| (self.first_day + Duration::days(idx as i64), label))
        })
    }

    /// Number the Sundays after Pentecost backwards from Christ the King
    fn number_after_pentecost(&mut self) {
        let mut lectionary = LAST_LECTIONARY;
        for slot in self.slots.iter_mut().rev() {
            if let Some(DayLabel::AfterPentecost { lectionary: l, .. }) = slot {
                *l = Some(lectionary);
                lectionary -= 1;
            }
        }
        debug!(
            "Sundays after Pentecost numbered down to Lectionary {}",
            lectionary + 1
        );
    }

    pub fn events(&self) -> Vec<CalendarEvent> {
        self.iter()
            .map(|(date, label)| CalendarEvent::day(date, &label.to_string()))
            .collect()
    }
}

fn season_label(
    season: Season,
    number: u32,
    outgoing: LectionaryYear,
    incoming: LectionaryYear,
) -> DayLabel {
    let nth = format!("{}{}", number, ordinal_suffix(number));
    match season {
        Season::AfterEpiphany => DayLabel::Text(format!(
            "{} Sunday after the Epiphany (Lectionary {}) 🅖 {}",
            nth, number, outgoing
        )),
        Season::Lent => DayLabel::Text(format!("{} Sunday in Lent 🅟 {}", nth, outgoing)),
        Season::Easter => DayLabel::Text(format!("{} Sunday of Easter 🅦 {}", nth, outgoing)),
        Season::AfterPentecost => DayLabel::AfterPentecost {
            number,
            lectionary: None,
            year: outgoing,
        },
        Season::Advent => DayLabel::Text(format!("{} Sunday of Advent 🅑 {}", nth, incoming)),
    }
}

/// Sundays and principal festivals of the church year within calendar `year`
pub fn sunday_labels(year: i32) -> Result<DayLabels, CalendarError> {
    check_year(year, FIRST_YEAR)?;
    let anchors = AnchorSet::new(year)?;
    let outgoing = LectionaryYear::starting_in(year - 1);
    let incoming = LectionaryYear::starting_in(year);
    let mut labels = DayLabels::new(year)?;

    for range in SEASON_RANGES.iter() {
        let start = match anchors.get(range.anchor) {
            Some(date) => date + Duration::days(range.offset),
            None => continue,
        };
        for number in range.first..=range.last {
            let date = start + Duration::days(7 * (number as i64 - 1));
            labels.set(date, season_label(range.season, number, outgoing, incoming));
        }
    }

    for feast in FEASTS.iter() {
        let date = match anchors.get(feast.anchor) {
            Some(date) => date + Duration::days(feast.offset),
            None => continue,
        };
        let text = match feast.marker {
            Marker::Outgoing => format!("{} {}", feast.name, outgoing),
            Marker::Incoming => format!("{} {}", feast.name, incoming),
            Marker::None => feast.name.to_string(),
        };
        labels.set(date, DayLabel::Text(text));
    }

    labels.number_after_pentecost();
    Ok(labels)
}

fn fixed_events(year: i32, table: &[(u32, u32, &str)]) -> Result<Vec<CalendarEvent>, CalendarError> {
    check_year(year, FIRST_YEAR)?;
    table
        .iter()
        .map(|(month, day, label)| Ok(CalendarEvent::day(make_date(year, *month, *day)?, label)))
        .collect()
}

/// Lesser festivals, fixed dates
pub fn lesser_festivals(year: i32) -> Result<Vec<CalendarEvent>, CalendarError> {
    fixed_events(year, &LESSER_FESTIVALS)
}

/// Commemorations, fixed dates; several commemorations may share a day
pub fn commemorations(year: i32) -> Result<Vec<CalendarEvent>, CalendarError> {
    fixed_events(year, &COMMEMORATIONS)
}

const LESSER_FESTIVALS: [(u32, u32, &str); 29] = [
    (1, 1, "NAME OF JESUS 🅦"),
    (1, 18, "CONFESSION OF PETER 🅦"),
    (1, 25, "CONVERSION OF PAUL 🅦"),
    (2, 2, "PRESENTATION OF OUR LORD 🅦"),
    (3, 19, "JOSEPH, GUARDIAN OF JESUS 🅦"),
    (3, 25, "ANNUNCIATION OF OUR LORD 🅦"),
    (4, 25, "MARK, EVANGELIST 🅢🅡"),
    (5, 1, "PHILIP AND JAMES, APOSTLES 🅢🅡"),
    (5, 14, "MATTHIAS, APOSTLE 🅢🅡"),
    (5, 31, "VISITATION OF MARY TO ELIZABETH 🅦"),
    (6, 11, "BARNABAS, APOSTLE 🅢🅡"),
    (6, 24, "JOHN THE BAPTIST 🅦"),
    (6, 29, "PETER AND PAUL, APOSTLES 🅢🅡"),
    (7, 3, "THOMAS, APOSTLE 🅢🅡"),
    (7, 22, "MARY MAGDALENE, APOSTLE 🅦"),
    (7, 25, "JAMES, APOSTLE 🅢🅡"),
    (8, 15, "MARY, MOTHER OF OUR LORD 🅦"),
    (8, 24, "BARTHOLOMEW, APOSTLE 🅢🅡"),
    (9, 14, "HOLY CROSS DAY 🅢🅡"),
    (9, 21, "MATTHEW, APOSTLE AND EVANGELIST 🅢🅡"),
    (9, 29, "MICHAEL AND ALL ANGELS 🅦"),
    (10, 18, "LUKE, EVANGELIST 🅢🅡"),
    (10, 28, "SIMON AND JUDE, APOSTLES 🅢🅡"),
    (10, 31, "REFORMATION DAY 🅡"),
    (11, 1, "ALL SAINTS DAY 🅦"),
    (11, 30, "ANDREW, APOSTLE 🅢🅡"),
    (12, 26, "STEPHEN, DEACON AND MARTYR 🅢🅡"),
    (12, 27, "JOHN, APOSTLE AND EVANGELIST 🅦"),
    (12, 28, "THE HOLY INNOCENTS, MARTYRS 🅢🅡"),
];

const COMMEMORATIONS: [(u32, u32, &str); 108] = [
    (1, 2, "Johann Konrad Wilhelm Loehe, renewer of the church, 1872 🅦"),
    (1, 15, "Martin Luther King Jr., renewer of society, martyr, 1968 🅢🅡"),
    (1, 17, "Antony of Egypt, renewer of the church, c.356 🅦"),
    (1, 17, "Pachomius, renewer of the church, 346 🅦"),
    (1, 18, "Week of Prayer for Christian Unity begins"),
    (1, 19, "Henry, Bishop of Uppsala, martyr, 1156 🅢🅡"),
    (1, 21, "Agnes, martyr, c.304 🅢🅡"),
    (1, 25, "Week of Prayer for Christian Unity ends"),
    (1, 26, "Timothy, Titus, and Silas, missionaries 🅦"),
    (1, 27, "Lydia, Dorcas, and Phoebe, witnesses to the faith 🅦"),
    (1, 28, "Thomas Aquinas, teacher, 1274 🅦"),
    (2, 3, "Ansgar, Bishop of Hamburg, missionary to Denmark and Sweden, 865 🅦"),
    (2, 5, "The Martyrs of Japan, 1597 🅢🅡"),
    (2, 14, "Cyril, monk, 869; Methodius, bishop, 885; missionaries to the Slavs 🅦"),
    (2, 18, "Martin Luther, renewer of the church, 1546 🅦"),
    (2, 23, "Polycarp, Bishop of Smyrna, martyr, 156 🅢🅡"),
    (2, 25, "Elizabeth Fedde, deaconess, 1921 🅦"),
    (3, 1, "George Herbert, hymnwriter, 1633 🅦"),
    (3, 2, "John Wesley, 1791; Charles Wesley, 1788; renewers of the church 🅦"),
    (3, 7, "Perpetua and Felicity and companions, martyrs at Carthage, 202 🅢🅡"),
    (3, 10, "Harriet Tubman, 1913; Sojourner Truth, 1883; renewers of society 🅦"),
    (3, 12, "Gregory the Great, Bishop of Rome, 604 🅦"),
    (3, 17, "Patrick, bishop, missionary to Ireland, 461 🅦"),
    (3, 21, "Thomas Cranmer, Bishop of Canterbury, martyr, 1556 🅢🅡"),
    (3, 22, "Jonathan Edwards, teacher, missionary to American Indians, 1758 🅦"),
    (3, 24, "Oscar Arnulfo Romero, Bishop of El Salvador, martyr, 1980 🅢🅡"),
    (3, 29, "Hans Nielsen Hauge, renewer of the church, 1824 🅦"),
    (3, 31, "John Donne, poet, 1631 🅦"),
    (4, 4, "Benedict the African, confessor, 1589 🅦"),
    (4, 6, "Albrecht Dürer, 1528; Matthias Grünewald, 1529; Lucas Cranach, 1553; artists 🅦"),
    (4, 9, "Dietrich Bonhoeffer, theologian, 1945 🅦"),
    (4, 10, "Mikael Agricola, Bishop of Turku, 1557 🅦"),
    (4, 19, "Olavus Petri, priest, 1552; Laurentius Petri, Bishop of Uppsala, 1572; renewers of the church 🅦"),
    (4, 21, "Anselm, Bishop of Canterbury, 1109 🅦"),
    (4, 23, "Toyohiko Kagawa, renewer of society, 1960 🅦"),
    (4, 29, "Catherine of Siena, theologian, 1380 🅦"),
    (5, 2, "Athanasius, Bishop of Alexandria, 373 🅦"),
    (5, 4, "Monica, mother of Augustine, 387 🅦"),
    (5, 8, "Julian of Norwich, renewer of the church c.1416 🅦"),
    (5, 9, "Nicolaus Ludwig von Zinzendorf, renewer of the church, hymnwriter, 1760 🅦"),
    (5, 18, "Erik, King of Sweden, martyr, 1160 🅢🅡"),
    (5, 21, "Helena, mother of Constantine, c.330 🅦"),
    (5, 24, "Nicolaus Copernicus, 1543; Leonhard Euler, 1783; scientists 🅦"),
    (5, 27, "John Calvin, renewer of the church, 1564 🅦"),
    (5, 29, "Jiří Třanovský, hymnwriter, 1637 🅦"),
    (6, 1, "Justin, martyr at Rome, c.165 🅢🅡"),
    (6, 3, "The Martyrs of Uganda, 1886 🅢🅡"),
    (6, 3, "John XXIII, Bishop of Rome, 1963 🅦"),
    (6, 5, "Boniface, Bishop of Mainz, missionary to Germany, martyr, 754 🅢🅡"),
    (6, 7, "Seattle, chief of the Duwamish Confederacy, 1866 🅦"),
    (6, 9, "Columba, 597; Aidan, 651, Bede, 735; renewers of the church 🅦"),
    (6, 14, "Basil the Great, Bishop of Caesarea, 379 🅦"),
    (6, 14, "Gregory, Bishop of Nyssa, c.385 🅦"),
    (6, 14, "Gregory of Nazianzus, Bishop of Constantinople, c.389 🅦"),
    (6, 14, "Macrina, teacher, c.379 🅦"),
    (6, 21, "Onesimos Nesib, translator, evangelist, 1931 🅦"),
    (6, 25, "Presentation of the Augsburg Confession, 1530 🅦"),
    (6, 25, "Philipp Melanchthon, renewer of the church, 1560 🅦"),
    (6, 27, "Cyril, Bishop of Alexandria, 444 🅦"),
    (6, 28, "Irenaeus, Bishop of Lyons, c.202 🅦"),
    (7, 1, "Catherine Winkworth, 1878; John Mason Neale, 1866; hymn translators 🅦"),
    (7, 6, "Jan Hus, martyr, 1415 🅢🅡"),
    (7, 11, "Benedict of Nursia, Abbot of Monte Cassino, c.540 🅦"),
    (7, 12, "Nathan Söderblom, Bishop of Uppsala, 1931 🅦"),
    (7, 17, "Bartolemé de Las Casas, missionary to the Indies, 1566 🅦"),
    (7, 23, "Birgitta of Sweden, renewer of the church, 1373 🅦"),
    (7, 28, "Johann Sebastian Bach, 1750; Heinrich Schütz, 1672; George Frederick Handel, 1759; musicians 🅦"),
    (7, 29, "Mary, Martha, and Lazarus of Bethany 🅦"),
    (7, 29, "Olaf, King of Norway, martyr, 1030 🅢🅡"),
    (8, 8, "Dominic, founder of the Order of Preachers (Dominicans), 1221 🅦"),
    (8, 10, "Lawrence, deacon, martyr, 258 🅢🅡"),
    (8, 11, "Clare, Abbess of San Damiano, 1253 🅦"),
    (8, 13, "Florence Nightingale, 1910; Clara Maass, 1901; renewers of society 🅦"),
    (8, 14, "Maximilian Kolbe, 1941; Kaj Munk, 1944; martyrs 🅢🅡"),
    (8, 20, "Bernard, Abbot of Clairvaux, 1153 🅦"),
    (8, 28, "Augustine, Bishop of Hippo, 430 🅦"),
    (8, 28, "Moses the Black, monk, martyr, c.400 🅢🅡"),
    (9, 2, "Nikolai Frederik Severin Grundtvig, bishop, renewer of the church, 1872 🅦"),
    (9, 9, "Peter Claver, priest, missionary to Colombia 1654 🅦"),
    (9, 13, "John Chrysostom, Bishop of Constantinople, 407 🅦"),
    (9, 16, "Cyprian, Bishop of Carthage, martyr, c.258 🅢🅡"),
    (9, 17, "Hildegard, Abbess of Bingen, 1179 🅦"),
    (9, 18, "Dag Hammarskjöld, renewer of society, 1961 🅦"),
    (9, 30, "Jerome, translator, teacher, 420 🅦"),
    (10, 4, "Francis of Assisi, renewer of the church, 1226 🅦"),
    (10, 4, "Theodor Fliedner, renewer of society, 1864 🅦"),
    (10, 6, "William Tyndale, translator, martyr, 1536 🅢🅡"),
    (10, 7, "Henry Melchior Muhlenberg, pastor in North America, 1787 🅦"),
    (10, 15, "Teresa of Avila, teacher, renewer of the church, 1582 🅦"),
    (10, 17, "Ignatius, Bishop of Antioch, martyr, c.115 🅢🅡"),
    (10, 23, "James of Jerusalem, martyr, c.62 🅢🅡"),
    (10, 26, "Philipp Nicolai, 1608; Johann Heermann, 1647; Paul Gerhardt, 1676; hymnwriters 🅦"),
    (11, 3, "Martín de Porres, renewer of society, 1639 🅦"),
    (11, 7, "John Christian Frederick Heyer, 1873; Bartholomaeus Ziegenbalg, 1719; Ludwig Nommensen, 1918; missionaries 🅦"),
    (11, 11, "Martin, Bishop of Tours, 397 🅦"),
    (11, 11, "Søren Aabye Kierkegaard, teacher, 1855 🅦"),
    (11, 17, "Elizabeth of Hungary, renewer of society, 1231 🅦"),
    (11, 23, "Clement, Bishop of Rome, c.100 🅦"),
    (11, 23, "Miguel Agustín Pro, martyr, 1927 🅢🅡"),
    (11, 24, "Justus Falckner, 1723; Jehu Jones, 1852; William Passavant, 1894; Pastors in North America 🅦"),
    (11, 25, "Isaac Watts, hymnwriter, 1748 🅦"),
    (12, 3, "Francis Xavier, missionary to Asia, 1552 🅦"),
    (12, 4, "John of Damascus, theologian and hymnwriter, c.749 🅦"),
    (12, 6, "Nicholas, Bishop of Myra, c.342 🅦"),
    (12, 7, "Ambrose, Bishop of Milan, 397 🅦"),
    (12, 13, "Lucy, martyr, 304 🅢🅡"),
    (12, 14, "John of the Cross, renewer of the church, 1591 🅦"),
    (12, 20, "Katharina von Bora Luther, renewer of the church, 1552 🅦"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn label(labels: &DayLabels, date: NaiveDate) -> String {
        labels.get(date).map(|l| l.to_string()).unwrap_or_default()
    }

    #[test]
    fn lectionary_years() {
        assert_eq!(LectionaryYear::starting_in(1992), LectionaryYear::A);
        assert_eq!(LectionaryYear::starting_in(2023), LectionaryYear::B);
        assert_eq!(LectionaryYear::starting_in(2024), LectionaryYear::C);
        assert_eq!(LectionaryYear::starting_in(2025), LectionaryYear::A);
        assert_eq!(LectionaryYear::C.to_string(), "🄲");
    }

    #[test]
    fn suffixes() {
        let expected = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (27, "th"),
            (31, "st"),
            (33, "rd"),
        ];
        for (n, suffix) in expected {
            assert_eq!(ordinal_suffix(n), suffix, "{}", n);
        }
    }

    #[test]
    fn anchors_2024() {
        let anchors = AnchorSet::new(2024).unwrap();
        assert_eq!(anchors.get(Anchor::Easter), Some(ymd(2024, 3, 31)));
        assert_eq!(anchors.get(Anchor::Lent), Some(ymd(2024, 2, 18)));
        assert_eq!(anchors.get(Anchor::Pentecost), Some(ymd(2024, 5, 19)));
        assert_eq!(anchors.get(Anchor::AfterEpiphany), Some(ymd(2024, 1, 7)));
        assert_eq!(anchors.get(Anchor::ChristTheKing), Some(ymd(2024, 11, 24)));
        assert_eq!(anchors.get(Anchor::Advent), Some(ymd(2024, 12, 1)));
        assert_eq!(anchors.get(Anchor::AfterChristmas), Some(ymd(2024, 12, 29)));
        assert_eq!(
            anchors.get(Anchor::PreviousAfterChristmas),
            Some(ymd(2023, 12, 31))
        );
        assert_eq!(anchors.get(Anchor::SecondAfterChristmas), None);
    }

    #[test]
    fn church_year_2024() {
        let labels = sunday_labels(2024).unwrap();
        assert_eq!(label(&labels, ymd(2024, 1, 6)), "Epiphany 🅦 🄱");
        assert_eq!(
            label(&labels, ymd(2024, 1, 7)),
            "Baptism of our Lord (Lectionary 1) 🅦 🄱"
        );
        assert_eq!(
            label(&labels, ymd(2024, 1, 14)),
            "2nd Sunday after the Epiphany (Lectionary 2) 🅖 🄱"
        );
        assert_eq!(label(&labels, ymd(2024, 2, 14)), "Ash Wednesday 🅟 🄱");
        assert_eq!(label(&labels, ymd(2024, 2, 18)), "1st Sunday in Lent 🅟 🄱");
        assert_eq!(label(&labels, ymd(2024, 3, 24)), "Palm Sunday 🅢🅟 🄱");
        assert_eq!(label(&labels, ymd(2024, 3, 29)), "Good Friday 🄱");
        assert_eq!(
            label(&labels, ymd(2024, 3, 31)),
            "Resurrection of Our Lord 🅦 🄱"
        );
        assert_eq!(label(&labels, ymd(2024, 4, 7)), "2nd Sunday of Easter 🅦 🄱");
        assert_eq!(label(&labels, ymd(2024, 5, 9)), "Ascension of the Lord 🅦 🄱");
        assert_eq!(label(&labels, ymd(2024, 5, 19)), "Day of Pentecost 🅡 🄱");
        assert_eq!(label(&labels, ymd(2024, 5, 26)), "The Holy Trinity 🅦 🄱");
        assert_eq!(
            label(&labels, ymd(2024, 6, 2)),
            "2nd Sunday after Pentecost (Lectionary 9) 🅖 🄱"
        );
        assert_eq!(
            label(&labels, ymd(2024, 11, 17)),
            "26th Sunday after Pentecost (Lectionary 33) 🅖 🄱"
        );
        assert_eq!(
            label(&labels, ymd(2024, 11, 24)),
            "Christ the King (Lectionary 34) 🅦 🄱"
        );
        assert_eq!(label(&labels, ymd(2024, 12, 1)), "1st Sunday of Advent 🅑 🄲");
        assert_eq!(label(&labels, ymd(2024, 12, 22)), "4th Sunday of Advent 🅑 🄲");
        assert_eq!(label(&labels, ymd(2024, 12, 25)), "Nativity of Our Lord 🅦");
        assert_eq!(
            label(&labels, ymd(2024, 12, 29)),
            "1st Sunday after Christmas 🅦 🄲"
        );
        // Jan 1st 2024 is a Monday, no Sunday after Christmas in January
        assert!(labels.get(ymd(2024, 1, 1)).is_none());
    }

    #[test]
    fn every_sunday_from_lent_labelled() {
        for year in 1993..=2100 {
            let labels = sunday_labels(year).unwrap();
            let lent = AnchorSet::new(year).unwrap().get(Anchor::Lent).unwrap();
            for sunday in crate::calendar::sundays_in_year(year).unwrap() {
                if sunday >= lent {
                    assert!(labels.get(sunday).is_some(), "{} unlabelled", sunday);
                }
            }
        }
    }

    #[test]
    fn lectionary_numbers_contiguous() {
        for year in 1993..=2200 {
            let labels = sunday_labels(year).unwrap();
            let numbers: Vec<(u32, u32)> = labels
                .iter()
                .filter_map(|(_, label)| match label {
                    DayLabel::AfterPentecost {
                        number,
                        lectionary,
                        ..
                    } => Some((*number, lectionary.unwrap())),
                    _ => None,
                })
                .collect();
            assert!(!numbers.is_empty());
            assert_eq!(numbers.last().unwrap().1, LAST_LECTIONARY);
            for pair in numbers.windows(2) {
                assert_eq!(pair[0].0 + 1, pair[1].0, "{}", year);
                assert_eq!(pair[0].1 + 1, pair[1].1, "{}", year);
            }
            // the numbering runs up to the Sunday before Christ the King
            let (last_date, _) = labels
                .iter()
                .filter(|(_, l)| matches!(l, DayLabel::AfterPentecost { .. }))
                .last()
                .unwrap();
            let anchors = AnchorSet::new(year).unwrap();
            assert_eq!(
                last_date + Duration::days(7),
                anchors.get(Anchor::ChristTheKing).unwrap()
            );
        }
    }

    #[test]
    fn second_sunday_after_christmas_years() {
        // Sunday Jan 2nd
        assert_eq!(
            second_sunday_after_christmas(2022).unwrap(),
            Some(ymd(2022, 1, 2))
        );
        // Sunday Jan 5th
        assert_eq!(
            second_sunday_after_christmas(2025).unwrap(),
            Some(ymd(2025, 1, 5))
        );
        // Epiphany on a Sunday
        assert_eq!(second_sunday_after_christmas(2019).unwrap(), None);
        // Sunday Jan 1st is the first Sunday after Christmas
        assert_eq!(second_sunday_after_christmas(2023).unwrap(), None);
        // Sunday Jan 7th
        assert_eq!(second_sunday_after_christmas(2024).unwrap(), None);

        // equivalent to the Sunday before the Baptism of our Lord, whenever
        // the Sundays following Jan 2nd and Jan 6th differ
        for year in 1993..=2200 {
            let differ = sunday_on_or_after(1, 6, year).unwrap()
                != sunday_on_or_after(1, 2, year).unwrap();
            let second = second_sunday_after_christmas(year).unwrap();
            assert_eq!(second.is_some(), differ, "{}", year);
            if let Some(second) = second {
                assert_eq!(second.weekday(), Weekday::Sun);
                let baptism = sunday_on_or_after(1, 7, year).unwrap();
                assert_eq!(second + Duration::days(7), baptism);
            }
        }
    }

    #[test]
    fn christmas_sundays_in_january() {
        let labels = sunday_labels(2022).unwrap();
        assert_eq!(
            label(&labels, ymd(2022, 1, 2)),
            "2nd Sunday after Christmas 🅦 🄲"
        );
        let labels = sunday_labels(2023).unwrap();
        assert_eq!(
            label(&labels, ymd(2023, 1, 1)),
            "1st Sunday after Christmas 🅦 🄰"
        );
        assert!(labels.get(ymd(2023, 1, 8)).is_some());
    }

    #[test]
    fn deterministic() {
        for year in [1993, 2024, 2038, 2285] {
            assert_eq!(sunday_labels(year).unwrap(), sunday_labels(year).unwrap());
        }
    }

    #[test]
    fn events_sorted() {
        let events = sunday_labels(2024).unwrap().events();
        assert!(events.windows(2).all(|w| w[0].start < w[1].start));
        assert_eq!(events[0].start.to_string(), "20240106");
    }

    #[test]
    fn fixed_tables() {
        let festivals = lesser_festivals(2024).unwrap();
        assert_eq!(festivals.len(), 29);
        assert_eq!(festivals[23].label, "REFORMATION DAY 🅡");
        assert_eq!(festivals[23].start.to_string(), "20241031");

        let commemorations = commemorations(2023).unwrap();
        assert_eq!(commemorations.len(), COMMEMORATIONS.len());
        let june_14 = commemorations
            .iter()
            .filter(|e| e.start.to_string() == "20230614")
            .count();
        assert_eq!(june_14, 4);
    }

    #[test]
    fn year_limits() {
        assert!(matches!(
            sunday_labels(FIRST_YEAR),
            Err(CalendarError::YearOutOfRange { .. })
        ));
        let too_late = NaiveDate::MAX.year();
        assert!(sunday_labels(too_late).is_err());
        assert!(lesser_festivals(too_late).is_err());
        assert!(commemorations(too_late).is_err());

        let last = crate::calendar::last_supported_year();
        assert!(!sunday_labels(last).unwrap().events().is_empty());
        assert_eq!(commemorations(last).unwrap().len(), COMMEMORATIONS.len());
    }
}
