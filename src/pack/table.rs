//! Static pack file table
//!
//! Keys, output roots and file spans of the ten retail pack files. Spans
//! are listed in pack order.

use super::{FileSpan, PackInfo, PackKind};

/// Every known pack file
pub static PACKS: &[PackInfo] = &[
    PackInfo {
        file_name: "model00.bin",
        key: 0x5C573A64,
        root: "model/common",
        extension: ".hgm",
        kind: PackKind::Model,
        files: &[
            FileSpan::new("BELTVIBRATOR", 0x000000, 0x008F08),
            FileSpan::new("BODYBLADE", 0x008F08, 0x0069E4),
            FileSpan::new("BODYVAC", 0x00F8EC, 0x003738),
            FileSpan::new("CHAIR", 0x013024, 0x00325C),
            FileSpan::new("CONGA", 0x016280, 0x00933C),
            FileSpan::new("CUSHION", 0x01F5BC, 0x001A22),
            FileSpan::new("DIABOLOS", 0x020FDE, 0x0054BA),
            FileSpan::new("DOMOHORNWINKLE", 0x026498, 0x00327C),
            FileSpan::new("DOOR", 0x029714, 0x0064FC),
            FileSpan::new("FLYPANB", 0x02FC10, 0x003D3A),
            FileSpan::new("FURIN", 0x03394A, 0x003200),
            FileSpan::new("HOUCHOU", 0x036B4A, 0x001E70),
            FileSpan::new("ICECANDY", 0x0389BA, 0x001254),
            FileSpan::new("ICECREAM", 0x039C0E, 0x00302C),
            FileSpan::new("KOTATSU", 0x03CC3A, 0x004086),
            FileSpan::new("LIGHTSABER", 0x040CC0, 0x006F2C),
            FileSpan::new("MILK", 0x047BEC, 0x003338),
            FileSpan::new("OTAMA", 0x04AF24, 0x004630),
            FileSpan::new("PAPAMAKURA", 0x04F554, 0x007C1A),
            FileSpan::new("PUNCHINGBAG", 0x05716E, 0x001AF6),
            FileSpan::new("REIZOUKO", 0x058C64, 0x00AF66),
            FileSpan::new("ROOM", 0x063BCA, 0x05DC8A),
            FileSpan::new("SEGWAY", 0x0C1854, 0x01687E),
            FileSpan::new("SENPUKI", 0x0D80D2, 0x00C9E2),
            FileSpan::new("TELEPORTER", 0x0E4AB4, 0x0072DC),
            FileSpan::new("TV", 0x0EBD90, 0x017722),
        ],
    },
    PackInfo {
        file_name: "model01.bin",
        key: 0xD8332DC9,
        root: "model/japanet",
        extension: ".hgm",
        kind: PackKind::Model,
        files: &[
            FileSpan::new("MONEYDIAL", 0x000000, 0x000712),
            FileSpan::new("TSU_HANTV", 0x000712, 0x06BF3E),
            FileSpan::new("TVANIMATETEXTURE", 0x06C650, 0x000878),
        ],
    },
    PackInfo {
        file_name: "model02.bin",
        key: 0x967B7AC3,
        root: "model/indicator",
        extension: ".hgm",
        kind: PackKind::Model,
        files: &[
            FileSpan::new("CONFIGMENU", 0x000000, 0x0042D8),
            FileSpan::new("SCREENSAVER", 0x0042D8, 0x001D5A),
        ],
    },
    PackInfo {
        file_name: "model03.bin",
        key: 0xAB86195F,
        root: "model/ending",
        extension: ".hgm",
        kind: PackKind::Model,
        files: &[
            FileSpan::new("ENDROLL", 0x000000, 0x0050B0),
            FileSpan::new("SMOKE", 0x0050B0, 0x0001F4),
        ],
    },
    PackInfo {
        file_name: "model04.bin",
        key: 0x8795DBBE,
        root: "model/osaka",
        extension: ".hgm",
        kind: PackKind::Model,
        files: &[
            FileSpan::new("CHUCHU", 0x000000, 0x0074C2),
            FileSpan::new("CLOTH", 0x0074C2, 0x00B4F8),
            FileSpan::new("DYNAMICSCLOTHBLUE", 0x0129BA, 0x0084AC),
            FileSpan::new("DYNAMICSCLOTHPINK", 0x01AE66, 0x0082F2),
            FileSpan::new("ETONADRESS", 0x023158, 0x008228),
            FileSpan::new("KATAHIMO", 0x02B380, 0x000ADC),
            FileSpan::new("MINISKIRT", 0x02BE5C, 0x001E40),
            FileSpan::new("NAGASODE", 0x02DC9C, 0x007A22),
            FileSpan::new("OSAKA", 0x0356BE, 0x09D494),
            FileSpan::new("OSAKANAGASODE", 0x0D2B52, 0x0089DA),
            FileSpan::new("TIGHTSKIRT", 0x0DB52C, 0x001E28),
        ],
    },
    PackInfo {
        file_name: "texture00.bin",
        key: 0x83D9DB43,
        root: "texture/common",
        extension: ".tga",
        kind: PackKind::Texture,
        files: &[
            FileSpan::new("CONGA_METAL", 0x000000, 0x0000EC),
            FileSpan::new("CONGA_REDWOOD", 0x0000EC, 0x003051),
            FileSpan::new("CONGA_SKIN", 0x00313D, 0x00C03B),
            FileSpan::new("DIABOLOS", 0x00F178, 0x00433D),
            FileSpan::new("FONTTABLE", 0x0134B5, 0x03002C),
            FileSpan::new("HOUCHOU_BLADE", 0x0434E1, 0x001D45),
            FileSpan::new("HOUCHOU_WOOD", 0x045226, 0x003036),
            FileSpan::new("MILK", 0x04825C, 0x007846),
            FileSpan::new("REF", 0x04FAA2, 0x000C25),
            FileSpan::new("ROOM_BEDWOOD2003", 0x0506C7, 0x00C085),
            FileSpan::new("ROOM_BOOKS", 0x05C74C, 0x002958),
            FileSpan::new("ROOM_DESKGRADMINI", 0x05F0A4, 0x000312),
            FileSpan::new("ROOM_DESKWOOD2003", 0x05F3B6, 0x00C02C),
            FileSpan::new("ROOM_DOMECFUCHI2", 0x06B3E2, 0x0008D2),
            FileSpan::new("ROOM_FLOARING3", 0x06BCB4, 0x00C040),
            FileSpan::new("ROOM_KOTATSUCARPET2003", 0x077CF4, 0x00C078),
            FileSpan::new("ROOM_KOTATSUSTIRIPE2003", 0x083D6C, 0x00022C),
            FileSpan::new("ROOM_KOTATSUTOP", 0x083F98, 0x001DD4),
            FileSpan::new("ROOM_KOTATSUWOOD2003", 0x085D6C, 0x000C31),
            FileSpan::new("ROOM_KRWOOD1B", 0x08699D, 0x00BF6B),
            FileSpan::new("ROOM_KRWOOD5FUCHI2", 0x092908, 0x002F9F),
            FileSpan::new("ROOM_PATTERNJ2FLOWER2", 0x0958A7, 0x02E5D8),
            FileSpan::new("ROOM_TVLINE", 0x0C3E7F, 0x002D4B),
            FileSpan::new("ROOM_TVRACK2", 0x0C6BCA, 0x002F51),
            FileSpan::new("ROOM_TVRACK3", 0x0C9B1B, 0x00C05E),
            FileSpan::new("ROOM_WASASHAB", 0x0D5B79, 0x02FC8A),
            FileSpan::new("ROOM_WOOD1C2TANSU", 0x105803, 0x00BF19),
            FileSpan::new("ROOM_WOOD1CKYOUDAI", 0x11171C, 0x00BE03),
            FileSpan::new("ROOM_WOOD1CKYOUDAI2", 0x11D51F, 0x00C04F),
            FileSpan::new("SKY_DAY", 0x12956E, 0x01F8E4),
            FileSpan::new("SKY_EVENING", 0x148E52, 0x00D79A),
            FileSpan::new("SKY_NIGHT", 0x1565EC, 0x001344),
            FileSpan::new("WHITETEX", 0x157930, 0x00002F),
        ],
    },
    PackInfo {
        file_name: "texture01.bin",
        key: 0xFE6725D1,
        root: "texture/japanet",
        extension: ".tga",
        kind: PackKind::Texture,
        files: &[
            FileSpan::new("CHIYOP_TV_BOARD", 0x000000, 0x007CFF),
            FileSpan::new("CLOTHR_AZMANGA", 0x007CFF, 0x00C02C),
            FileSpan::new("CLOTHR_CHEERLEADER", 0x013D2B, 0x00C02C),
            FileSpan::new("CLOTHR_CHUCHU", 0x01FD57, 0x00C02C),
            FileSpan::new("CLOTHR_CLOTHBLUE", 0x02BD83, 0x007DB2),
            FileSpan::new("CLOTHR_CLOTHORANGE", 0x033B35, 0x007CA9),
            FileSpan::new("CLOTHR_CLOTHPINK", 0x03B7DE, 0x007C24),
            FileSpan::new("CLOTHR_ETONADRESS", 0x043402, 0x00C02C),
            FileSpan::new("CLOTHR_EXERSISE", 0x04F42E, 0x00C02C),
            FileSpan::new("CLOTHR_HADAKA", 0x05B45A, 0x00C02C),
            FileSpan::new("CLOTHR_HATAN", 0x067486, 0x00C02C),
            FileSpan::new("CLOTHR_JAJIYELLOW", 0x0734B2, 0x00C02C),
            FileSpan::new("CLOTHR_JAZIRED", 0x07F4DE, 0x00C02C),
            FileSpan::new("CLOTHR_LEOTARD", 0x08B50A, 0x00C02C),
            FileSpan::new("CLOTHR_MOMO", 0x097536, 0x00C02C),
            FileSpan::new("CLOTHR_PAJAMAORANGE", 0x0A3562, 0x00C02C),
            FileSpan::new("CLOTHR_SHADOW", 0x0AF58E, 0x0026B0),
            FileSpan::new("CLOTHR_SWIMBIKINIA", 0x0B1C3E, 0x00C02C),
            FileSpan::new("CLOTHR_SWIMBIKINIB", 0x0BDC6A, 0x00C02C),
            FileSpan::new("CLOTHR_SWIMSCHOOL", 0x0C9C96, 0x00C02C),
            FileSpan::new("CLOTHR_SWIMWANPIA", 0x0D5CC2, 0x00C02C),
            FileSpan::new("CLOTHR_TRAININGA", 0x0E1CEE, 0x00C02C),
            FileSpan::new("CLOTHR_TRAININGB", 0x0EDD1A, 0x00C02C),
            FileSpan::new("CLOTHR_YAMAYURI", 0x0F9D46, 0x00C02C),
            FileSpan::new("DIALNUMBERS", 0x105D72, 0x0055FB),
            FileSpan::new("SHOPPING_ARROWA", 0x10B36D, 0x01002C),
            FileSpan::new("SHOPPING_ARROWB", 0x11B399, 0x08002C),
            FileSpan::new("SHOPPING_BUBBLE", 0x19B3C5, 0x01002C),
            FileSpan::new("SHOPPING_TABLE", 0x1AB3F1, 0x10002C),
            FileSpan::new("TV_ITEM01_KOTATSU", 0x2AB41D, 0x001E91),
            FileSpan::new("TV_ITEM02_BODYBLADE", 0x2AD2AE, 0x00242A),
            FileSpan::new("TV_ITEM03_DOMOHO", 0x2AF6D8, 0x002529),
            FileSpan::new("TV_ITEM04_PUNCHINGBAG", 0x2B1C01, 0x002271),
            FileSpan::new("TV_ITEM05_HOUKYOU", 0x2B3E72, 0x002242),
            FileSpan::new("TV_ITEM06_SUTEKIMAKURA", 0x2B60B4, 0x002477),
            FileSpan::new("TV_ITEM07_LIGHTSAVER", 0x2B852B, 0x00224B),
            FileSpan::new("TV_ITEM08_GINGER", 0x2BA776, 0x001F9E),
            FileSpan::new("TV_ITEM09_TAKAEDA", 0x2BC714, 0x00272E),
            FileSpan::new("TV_ITEM10_CAPMUGIWARA", 0x2BEE42, 0x00213A),
            FileSpan::new("TV_ITEM11_CAPNURSE", 0x2C0F7C, 0x001DC6),
            FileSpan::new("TV_ITEM12_CAPMAID", 0x2C2D42, 0x002F11),
            FileSpan::new("TV_ITEM13_KUROBUCHI", 0x2C5C53, 0x00267E),
            FileSpan::new("TV_ITEM14_MIMINEKO", 0x2C82D1, 0x001D76),
            FileSpan::new("TV_ITEM15_MIMIKUMA", 0x2CA047, 0x001C5E),
            FileSpan::new("TV_ITEM16_MIMIUSA", 0x2CBCA5, 0x001C4A),
            FileSpan::new("TV_ITEM17_MIMIASUKA", 0x2CD8EF, 0x001E6A),
            FileSpan::new("TV_ITEM18_TAILNEKO", 0x2CF759, 0x002470),
            FileSpan::new("TV_ITEM19_BURUBURU", 0x2D1BC9, 0x002327),
            FileSpan::new("TV_ITEM20_KITAROU", 0x2D3EF0, 0x002C9E),
            FileSpan::new("TV_ITEM21_EYEOYADI", 0x2D6B8E, 0x0027F2),
            FileSpan::new("TV_ITEM22_SHAMPOOHAT", 0x2D9380, 0x002523),
            FileSpan::new("TV_ITEM23_GLASSSTAR", 0x2DB8A3, 0x0020D5),
            FileSpan::new("TV_ITEM24_MULTISENSOR", 0x2DD978, 0x0025E0),
            FileSpan::new("TV_ITEM25_ANGELRING", 0x2DFF58, 0x002A22),
            FileSpan::new("TV_ITEM26_ANGELWING", 0x2E297A, 0x0022C8),
            FileSpan::new("TV_ITEM27_TELEPORTER", 0x2E4C42, 0x0028CF),
            FileSpan::new("TV_ITEM28_HOUCHOU", 0x2E7511, 0x001FAA),
            FileSpan::new("TV_ITEM29_FLYPANB", 0x2E94BB, 0x002E8C),
            FileSpan::new("TV_ITEM30_NABE", 0x2EC347, 0x0021C7),
            FileSpan::new("TV_ITEM30_OSAGECHIYO", 0x2EE50E, 0x0022B4),
            FileSpan::new("TV_ITEM32_FLYPANA", 0x2F07C2, 0x002C76),
            FileSpan::new("TV_ITEM33_CONGA", 0x2F3438, 0x002113),
            FileSpan::new("TV_ITEM34_MIKAN", 0x2F554B, 0x001DCD),
            FileSpan::new("TV_ITEM35_OTAMA", 0x2F7318, 0x001E80),
            FileSpan::new("TV_ITEM36_YUNOMI", 0x2F9198, 0x0025DE),
            FileSpan::new("TV_ITEM37_CAPCHIYOPAPA", 0x2FB776, 0x0020DF),
            FileSpan::new("TV_ITEM38_MIMISARU", 0x2FD855, 0x002095),
            FileSpan::new("TV_ITEM39_SIPPOSARU", 0x2FF8EA, 0x00240E),
            FileSpan::new("TV_ITEM40_CAPNENEKO", 0x301CF8, 0x002C4F),
            FileSpan::new("TV_ITEM41_CAPALIAN", 0x304947, 0x002A61),
            FileSpan::new("TV_ITEM42_CAPSUMMER", 0x3073A8, 0x001FDB),
            FileSpan::new("TV_ITEM43_OSAGESPIN", 0x309383, 0x0027A6),
            FileSpan::new("TV_ITEM44_CAPHELMET", 0x30BB29, 0x00217F),
            FileSpan::new("TV_ITEM45_FURIN", 0x30DCA8, 0x002483),
            FileSpan::new("TV_ITEM46_REIZOUKO", 0x31012B, 0x0021FA),
            FileSpan::new("TV_ITEM47_SENPUKI", 0x312325, 0x0023AD),
            FileSpan::new("TV_ITEM48_COMIC", 0x3146D2, 0x001958),
            FileSpan::new("TV_ITEM49_POOL", 0x31602A, 0x001EFC),
            FileSpan::new("TV_ITEM50_KAIGOURI", 0x317F26, 0x0022AE),
            FileSpan::new("TV_ITEM51_ICECREAM", 0x31A1D4, 0x002192),
            FileSpan::new("TV_ITEM52_ICECANDY", 0x31C366, 0x001ABC),
            FileSpan::new("TV_ITEM53_MILK", 0x31DE22, 0x001C83),
            FileSpan::new("TV_ITEM54_GENSHIBEEF", 0x31FAA5, 0x002282),
            FileSpan::new("TV_ITEM55_MELONPAN", 0x321D27, 0x001B4F),
            FileSpan::new("TV_ITEM56_ANPAN", 0x323876, 0x002884),
            FileSpan::new("TV_ITEM57_BLUECLOTH", 0x3260FA, 0x00202D),
            FileSpan::new("TV_ITEM58_CAPAORINGO", 0x328127, 0x00239B),
            FileSpan::new("TV_ITEM59_ORANGECLOTH", 0x32A4C2, 0x002275),
            FileSpan::new("TV_ITEM60_CAPGREENBERET", 0x32C737, 0x002D34),
            FileSpan::new("TV_ITEM61_SWIMSEPARATE", 0x32F46B, 0x00244C),
            FileSpan::new("TV_ITEM62_CAMERA", 0x3318B7, 0x0027DF),
            FileSpan::new("TV_ITEM63_PAJAMAORANGE", 0x334096, 0x002BCE),
            FileSpan::new("TV_ITEM64_JAZIRED", 0x336C64, 0x0021E8),
            FileSpan::new("TV_ITEM65_JAZIYELLOW", 0x338E4C, 0x00200F),
            FileSpan::new("TV_ITEM66_CHEERLEADER", 0x33AE5B, 0x002533),
            FileSpan::new("TV_ITEM67_LILIAN", 0x33D38E, 0x0027F0),
            FileSpan::new("TV_ITEM68_HATAN", 0x33FB7E, 0x002A28),
            FileSpan::new("TV_ITEM69_AZMANGA", 0x3425A6, 0x003001),
            FileSpan::new("TV_ITEM70_MOMODRESS", 0x3455A7, 0x00202F),
            FileSpan::new("TV_ITEM71_ETONADRESS", 0x3475D6, 0x002828),
            FileSpan::new("TV_ITEM72_CHUCHU", 0x349DFE, 0x001D64),
            FileSpan::new("TV_ITEM73_LEOTARD", 0x34BB62, 0x001FA6),
            FileSpan::new("TV_ITEM74_SWIMONPIECEA", 0x34DB08, 0x002768),
            FileSpan::new("TV_ITEM75_SWIMBIKINIA", 0x350270, 0x00225C),
            FileSpan::new("TV_ITEM76_TRAININGA", 0x3524CC, 0x00233B),
            FileSpan::new("TV_ITEM77_TRAININGB", 0x354807, 0x0025FF),
            FileSpan::new("TV_ITEM78_SWIMBIKINIB", 0x356E06, 0x001F61),
            FileSpan::new("TV_ITEM79_SWIMSCHOOL", 0x358D67, 0x0025A6),
            FileSpan::new("TV_ITEM80_EXCERSISE", 0x35B30D, 0x002348),
            FileSpan::new("TV_ITEM81_HENSHINBELT", 0x35D655, 0x002CD2),
            FileSpan::new("TV_ITEM82_ETONAWING", 0x360327, 0x0029E1),
            FileSpan::new("TV_ITEM83_ETONABRACELET", 0x362D08, 0x002ECB),
            FileSpan::new("TV_ITEM84_ETONAKUBIWA", 0x365BD3, 0x002841),
            FileSpan::new("TV_ITEM85_CAPAKAZUKIN", 0x368414, 0x001EAE),
            FileSpan::new("TV_ITEM86_CAPANTENA", 0x36A2C2, 0x001BCF),
            FileSpan::new("TV_ITEM87_CAPWITCH", 0x36BE91, 0x0025CB),
            FileSpan::new("TV_ITEM88_MIMIAYANAMI", 0x36E45C, 0x0021F2),
            FileSpan::new("TV_ITEM89_CAPMOMO", 0x37064E, 0x001ED4),
            FileSpan::new("TV_ITEM90_CAPKOSMOS", 0x372522, 0x002848),
            FileSpan::new("TV_ITEM91_ETONAOSAGE", 0x374D6A, 0x00323B),
            FileSpan::new("TV_ITEM92_RIBBONDEFRON", 0x377FA5, 0x0035AC),
            FileSpan::new("TV_ITEM93_DIABOLOS", 0x37B551, 0x002FDC),
            FileSpan::new("TV_ITEM94_DRYER", 0x37E52D, 0x0033C2),
            FileSpan::new("TV_ITEM95_ETONABRACELET2", 0x3818EF, 0x002EE8),
        ],
    },
    PackInfo {
        file_name: "texture02.bin",
        key: 0x75893254,
        root: "texture/indicator",
        extension: ".tga",
        kind: PackKind::Texture,
        files: &[
            FileSpan::new("CONFIG", 0x000000, 0x0218CE),
            FileSpan::new("SC_MOZI", 0x0218CE, 0x004BE2),
        ],
    },
    PackInfo {
        file_name: "texture03.bin",
        key: 0x323D47A5,
        root: "texture/ending",
        extension: ".tga",
        kind: PackKind::Texture,
        files: &[
            FileSpan::new("DUMMY_END_CONGRATULATIONS", 0x000000, 0x00002F),
            FileSpan::new("DUMMY_END_GRADATION", 0x00002F, 0x00002F),
            FileSpan::new("DUMMY_END_STAFF1", 0x00005E, 0x00002F),
            FileSpan::new("DUMMY_END_STAFF2", 0x00008D, 0x00002F),
            FileSpan::new("EFFECT_BLACKSMOKEC", 0x0000BC, 0x009878),
            FileSpan::new("END_CONGRATULATIONS", 0x009934, 0x022E12),
            FileSpan::new("END_GRADATION", 0x02C746, 0x0000CC),
            FileSpan::new("END_STAFF1", 0x02C812, 0x016415),
            FileSpan::new("END_STAFF2", 0x042C27, 0x01CD1C),
        ],
    },
    PackInfo {
        file_name: "texture04.bin",
        key: 0x98D57FFC,
        root: "texture/osaka",
        extension: ".tga",
        kind: PackKind::Texture,
        files: &[
            FileSpan::new("CAPANTENAGRAY", 0x000000, 0x0002CC),
            FileSpan::new("CAPAORINGOFRAME", 0x0002CC, 0x000807),
            FileSpan::new("CAPKOSMOS", 0x000AD3, 0x004415),
            FileSpan::new("CAPNENEKO", 0x004EE8, 0x00560B),
            FileSpan::new("CAPRIBBONDEFRON", 0x00A4F3, 0x00033C),
            FileSpan::new("CLOTHAZMANGA", 0x00A82F, 0x00952C),
            FileSpan::new("CLOTHBLUE", 0x013D5B, 0x02E15F),
            FileSpan::new("CLOTHCHEERLEADER", 0x041EBA, 0x000316),
            FileSpan::new("CLOTHCHUCHU", 0x0421D0, 0x00013C),
            FileSpan::new("CLOTHETONA", 0x04230C, 0x017DAD),
            FileSpan::new("CLOTHHATAN", 0x05A0B9, 0x00A99A),
            FileSpan::new("CLOTHMOMO", 0x064A53, 0x00A12A),
            FileSpan::new("CLOTHORANGE", 0x06EB7D, 0x02F0CC),
            FileSpan::new("CLOTHPINK", 0x09DC49, 0x02ECA7),
            FileSpan::new("CLOTHYAMAYURI", 0x0CC8F0, 0x000030),
            FileSpan::new("HAIBANE_RING", 0x0CC920, 0x000092),
            FileSpan::new("JAZI", 0x0CC9B2, 0x01EED2),
            FileSpan::new("JAZIYELLOW", 0x0EB884, 0x01CA92),
            FileSpan::new("MARUKAGE", 0x108316, 0x00102C),
            FileSpan::new("MIMIASUKA", 0x109342, 0x00031C),
            FileSpan::new("MIMIMOMO", 0x10965E, 0x00091D),
            FileSpan::new("MIMIMOMOGRAY", 0x109F7B, 0x000BC0),
            FileSpan::new("MIMIREI", 0x10AB3B, 0x00032C),
            FileSpan::new("MIMIWITCH", 0x10AE67, 0x000108),
            FileSpan::new("OSAGECHIYOHAIRCOLOR", 0x10AF6F, 0x000092),
            FileSpan::new("OSAGESPIN", 0x10B001, 0x002F6C),
            FileSpan::new("OSAKA_ARMAZMANGA", 0x10DF6D, 0x000EAF),
            FileSpan::new("OSAKA_ARMCHEERLEADER", 0x10EE1C, 0x000F93),
            FileSpan::new("OSAKA_ARMETONA", 0x10FDAF, 0x0059FF),
            FileSpan::new("OSAKA_ARMHATAN", 0x1157AE, 0x00336B),
            FileSpan::new("OSAKA_ARMMOMO", 0x118B19, 0x00B3FB),
            FileSpan::new("OSAKA_ARMTRAININGA", 0x123F14, 0x000FB7),
            FileSpan::new("OSAKA_ARMTRAININGB", 0x124ECB, 0x001428),
            FileSpan::new("OSAKA_ARMYAMAYURI", 0x1262F3, 0x000A07),
            FileSpan::new("OSAKA_FACE_1", 0x126CFA, 0x002B67),
            FileSpan::new("OSAKA_FACE_10", 0x129861, 0x002489),
            FileSpan::new("OSAKA_FACE_11", 0x12BCEA, 0x0014EB),
            FileSpan::new("OSAKA_FACE_12", 0x12D1D5, 0x00160C),
            FileSpan::new("OSAKA_FACE_2", 0x12E7E1, 0x0009F9),
            FileSpan::new("OSAKA_FACE_3", 0x12F1DA, 0x001237),
            FileSpan::new("OSAKA_FACE_4", 0x130411, 0x000E3B),
            FileSpan::new("OSAKA_FACE_5", 0x13124C, 0x002211),
            FileSpan::new("OSAKA_FACE_6", 0x13345D, 0x000B91),
            FileSpan::new("OSAKA_FACE_7", 0x133FEE, 0x0013A9),
            FileSpan::new("OSAKA_FACE_8", 0x135397, 0x0013AA),
            FileSpan::new("OSAKA_FACE_9", 0x136741, 0x00323A),
            FileSpan::new("OSAKA_HAIR01GRAD", 0x13997B, 0x00012C),
            FileSpan::new("OSAKA_HAIR02ETONA", 0x139AA7, 0x00012C),
            FileSpan::new("OSAKA_LEGAZMANGA", 0x139BD3, 0x000670),
            FileSpan::new("OSAKA_LEGCHEERLEADER", 0x13A243, 0x000B73),
            FileSpan::new("OSAKA_LEGCHUCHU", 0x13ADB6, 0x004C5E),
            FileSpan::new("OSAKA_LEGETONA", 0x13FA14, 0x00593D),
            FileSpan::new("OSAKA_LEGHATAN", 0x145351, 0x002989),
            FileSpan::new("OSAKA_LEGLEOTARD", 0x147CDA, 0x006FD2),
            FileSpan::new("OSAKA_LEGMOMO", 0x14ECAC, 0x0117AF),
            FileSpan::new("OSAKA_LEGSWIMSHOLDER1", 0x16045B, 0x00022C),
            FileSpan::new("OSAKA_LEGTRAININGAPSD", 0x160687, 0x0005A4),
            FileSpan::new("OSAKA_LEGTRAININGBPSD", 0x160C2B, 0x0019EB),
            FileSpan::new("OSAKA_LEGYAMAYURI", 0x162616, 0x005131),
            FileSpan::new("OSAKA_NECKCHEERLEADER", 0x167747, 0x0000D4),
            FileSpan::new("OSAKA_NECKETONA", 0x16781B, 0x001A15),
            FileSpan::new("OSAKA_NECKHATAN", 0x169230, 0x00190F),
            FileSpan::new("OSAKA_NECKMOMO", 0x16AB3F, 0x0000AC),
            FileSpan::new("OSAKA_NECKTRAININGA", 0x16ABEB, 0x00010C),
            FileSpan::new("OSAKA_NECKTRAININGB", 0x16ACF7, 0x00014C),
            FileSpan::new("OSAKA_SKINARM", 0x16AE43, 0x00002F),
            FileSpan::new("OSAKA_SKINAZMANGA", 0x16AE72, 0x011DF1),
            FileSpan::new("OSAKA_SKINBODY", 0x17CC63, 0x00801F),
            FileSpan::new("OSAKA_SKINBODYCHUCHU", 0x184C82, 0x01736B),
            FileSpan::new("OSAKA_SKINBODYLEOTARD", 0x19BFED, 0x015A77),
            FileSpan::new("OSAKA_SKINBODYSWIM", 0x1B1A64, 0x0111F6),
            FileSpan::new("OSAKA_SKINBODYSWIMNS1", 0x1C2C5A, 0x01298C),
            FileSpan::new("OSAKA_SKINBODYSWIMNS2", 0x1D55E6, 0x0101B0),
            FileSpan::new("OSAKA_SKINBODYSWIMSHOLDER1", 0x1E5796, 0x013359),
            FileSpan::new("OSAKA_SKINBODYSWIMSHOLDER2", 0x1F8AEF, 0x0124AF),
            FileSpan::new("OSAKA_SKINBODYTRAININGA", 0x20AF9E, 0x009BD2),
            FileSpan::new("OSAKA_SKINBODYTRAININGB", 0x214B70, 0x00C50B),
            FileSpan::new("OSAKA_SKINCHEERLEADER", 0x22107B, 0x006CF4),
            FileSpan::new("OSAKA_SKINHATAN", 0x227D6F, 0x00F3E3),
            FileSpan::new("OSAKA_SKINLEG", 0x237152, 0x00002F),
            FileSpan::new("OSAKA_SKINMOMO", 0x237181, 0x012EAF),
            FileSpan::new("OSAKA_SKINNECK", 0x24A030, 0x00002F),
            FileSpan::new("OSAKA_SKINYAMAYURI", 0x24A05F, 0x00DB58),
            FileSpan::new("PAJAMAORANGE", 0x257BB7, 0x004741),
        ],
    },
];
