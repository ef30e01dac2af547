//! Equal-tempered note frequencies in Hz, rounded to whole numbers.
//!
//! Octaves 0 through 8 follow scientific pitch notation (A4 = 440 Hz).
//! Sharps are spelled `CS4`, `FS5`, ...; the enharmonic flats (`DB4`,
//! `GB5`, ...) are aliases of the same value.

/// Silence.
pub const REST: u16 = 0;

/// Highest octave present in the table.
pub const MAX_OCTAVE: u8 = 8;

/// The twelve pitch classes of an octave, starting at C.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl NoteName {
    /// Pitch class for a letter (`'A'..='G'`, either case) and a semitone
    /// offset of -1 (flat), 0 (natural) or +1 (sharp).
    ///
    /// Flats and sharps that cross the B/C boundary (Cb, B#) are rejected.
    pub fn from_letter(letter: char, accidental: i8) -> Option<Self> {
        let natural: i8 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let semitone = natural + accidental;
        if !(0..12).contains(&semitone) {
            return None;
        }
        Some(Self::from_semitone(semitone as u8))
    }

    const fn from_semitone(semitone: u8) -> Self {
        match semitone {
            0 => Self::C,
            1 => Self::Cs,
            2 => Self::D,
            3 => Self::Ds,
            4 => Self::E,
            5 => Self::F,
            6 => Self::Fs,
            7 => Self::G,
            8 => Self::Gs,
            9 => Self::A,
            10 => Self::As,
            _ => Self::B,
        }
    }
}

/// Frequency table indexed by `[NoteName as usize][octave]`.
const TABLE: [[u16; 9]; 12] = [
    [16, 33, 65, 131, 262, 523, 1047, 2093, 4186],
    [17, 35, 69, 139, 277, 554, 1109, 2217, 4435],
    [18, 37, 73, 147, 294, 587, 1175, 2349, 4699],
    [19, 39, 77, 155, 311, 622, 1245, 2489, 4978],
    [21, 41, 82, 165, 330, 659, 1319, 2637, 5274],
    [22, 44, 87, 175, 349, 698, 1397, 2794, 5588],
    [23, 46, 92, 185, 370, 740, 1480, 2960, 5920],
    [25, 49, 98, 196, 392, 784, 1568, 3136, 6272],
    [26, 52, 104, 208, 415, 831, 1661, 3322, 6645],
    [27, 55, 110, 220, 440, 880, 1760, 3520, 7040],
    [29, 58, 116, 233, 466, 932, 1865, 3729, 7459],
    [31, 62, 123, 247, 494, 988, 1976, 3951, 7902],
];

/// Look up the frequency of a note; `None` above octave 8.
pub const fn note_hz(name: NoteName, octave: u8) -> Option<u16> {
    if octave > MAX_OCTAVE {
        return None;
    }
    Some(TABLE[name as usize][octave as usize])
}

pub const C0: u16 = TABLE[0][0];
pub const C1: u16 = TABLE[0][1];
pub const C2: u16 = TABLE[0][2];
pub const C3: u16 = TABLE[0][3];
pub const C4: u16 = TABLE[0][4];
pub const C5: u16 = TABLE[0][5];
pub const C6: u16 = TABLE[0][6];
pub const C7: u16 = TABLE[0][7];
pub const C8: u16 = TABLE[0][8];

pub const CS0: u16 = TABLE[1][0];
pub const CS1: u16 = TABLE[1][1];
pub const CS2: u16 = TABLE[1][2];
pub const CS3: u16 = TABLE[1][3];
pub const CS4: u16 = TABLE[1][4];
pub const CS5: u16 = TABLE[1][5];
pub const CS6: u16 = TABLE[1][6];
pub const CS7: u16 = TABLE[1][7];
pub const CS8: u16 = TABLE[1][8];
pub const DB0: u16 = CS0;
pub const DB1: u16 = CS1;
pub const DB2: u16 = CS2;
pub const DB3: u16 = CS3;
pub const DB4: u16 = CS4;
pub const DB5: u16 = CS5;
pub const DB6: u16 = CS6;
pub const DB7: u16 = CS7;
pub const DB8: u16 = CS8;

pub const D0: u16 = TABLE[2][0];
pub const D1: u16 = TABLE[2][1];
pub const D2: u16 = TABLE[2][2];
pub const D3: u16 = TABLE[2][3];
pub const D4: u16 = TABLE[2][4];
pub const D5: u16 = TABLE[2][5];
pub const D6: u16 = TABLE[2][6];
pub const D7: u16 = TABLE[2][7];
pub const D8: u16 = TABLE[2][8];

pub const DS0: u16 = TABLE[3][0];
pub const DS1: u16 = TABLE[3][1];
pub const DS2: u16 = TABLE[3][2];
pub const DS3: u16 = TABLE[3][3];
pub const DS4: u16 = TABLE[3][4];
pub const DS5: u16 = TABLE[3][5];
pub const DS6: u16 = TABLE[3][6];
pub const DS7: u16 = TABLE[3][7];
pub const DS8: u16 = TABLE[3][8];
pub const EB0: u16 = DS0;
pub const EB1: u16 = DS1;
pub const EB2: u16 = DS2;
pub const EB3: u16 = DS3;
pub const EB4: u16 = DS4;
pub const EB5: u16 = DS5;
pub const EB6: u16 = DS6;
pub const EB7: u16 = DS7;
pub const EB8: u16 = DS8;

pub const E0: u16 = TABLE[4][0];
pub const E1: u16 = TABLE[4][1];
pub const E2: u16 = TABLE[4][2];
pub const E3: u16 = TABLE[4][3];
pub const E4: u16 = TABLE[4][4];
pub const E5: u16 = TABLE[4][5];
pub const E6: u16 = TABLE[4][6];
pub const E7: u16 = TABLE[4][7];
pub const E8: u16 = TABLE[4][8];

pub const F0: u16 = TABLE[5][0];
pub const F1: u16 = TABLE[5][1];
pub const F2: u16 = TABLE[5][2];
pub const F3: u16 = TABLE[5][3];
pub const F4: u16 = TABLE[5][4];
pub const F5: u16 = TABLE[5][5];
pub const F6: u16 = TABLE[5][6];
pub const F7: u16 = TABLE[5][7];
pub const F8: u16 = TABLE[5][8];

pub const FS0: u16 = TABLE[6][0];
pub const FS1: u16 = TABLE[6][1];
pub const FS2: u16 = TABLE[6][2];
pub const FS3: u16 = TABLE[6][3];
pub const FS4: u16 = TABLE[6][4];
pub const FS5: u16 = TABLE[6][5];
pub const FS6: u16 = TABLE[6][6];
pub const FS7: u16 = TABLE[6][7];
pub const FS8: u16 = TABLE[6][8];
pub const GB0: u16 = FS0;
pub const GB1: u16 = FS1;
pub const GB2: u16 = FS2;
pub const GB3: u16 = FS3;
pub const GB4: u16 = FS4;
pub const GB5: u16 = FS5;
pub const GB6: u16 = FS6;
pub const GB7: u16 = FS7;
pub const GB8: u16 = FS8;

pub const G0: u16 = TABLE[7][0];
pub const G1: u16 = TABLE[7][1];
pub const G2: u16 = TABLE[7][2];
pub const G3: u16 = TABLE[7][3];
pub const G4: u16 = TABLE[7][4];
pub const G5: u16 = TABLE[7][5];
pub const G6: u16 = TABLE[7][6];
pub const G7: u16 = TABLE[7][7];
pub const G8: u16 = TABLE[7][8];

pub const GS0: u16 = TABLE[8][0];
pub const GS1: u16 = TABLE[8][1];
pub const GS2: u16 = TABLE[8][2];
pub const GS3: u16 = TABLE[8][3];
pub const GS4: u16 = TABLE[8][4];
pub const GS5: u16 = TABLE[8][5];
pub const GS6: u16 = TABLE[8][6];
pub const GS7: u16 = TABLE[8][7];
pub const GS8: u16 = TABLE[8][8];
pub const AB0: u16 = GS0;
pub const AB1: u16 = GS1;
pub const AB2: u16 = GS2;
pub const AB3: u16 = GS3;
pub const AB4: u16 = GS4;
pub const AB5: u16 = GS5;
pub const AB6: u16 = GS6;
pub const AB7: u16 = GS7;
pub const AB8: u16 = GS8;

pub const A0: u16 = TABLE[9][0];
pub const A1: u16 = TABLE[9][1];
pub const A2: u16 = TABLE[9][2];
pub const A3: u16 = TABLE[9][3];
pub const A4: u16 = TABLE[9][4];
pub const A5: u16 = TABLE[9][5];
pub const A6: u16 = TABLE[9][6];
pub const A7: u16 = TABLE[9][7];
pub const A8: u16 = TABLE[9][8];

pub const AS0: u16 = TABLE[10][0];
pub const AS1: u16 = TABLE[10][1];
pub const AS2: u16 = TABLE[10][2];
pub const AS3: u16 = TABLE[10][3];
pub const AS4: u16 = TABLE[10][4];
pub const AS5: u16 = TABLE[10][5];
pub const AS6: u16 = TABLE[10][6];
pub const AS7: u16 = TABLE[10][7];
pub const AS8: u16 = TABLE[10][8];
pub const BB0: u16 = AS0;
pub const BB1: u16 = AS1;
pub const BB2: u16 = AS2;
pub const BB3: u16 = AS3;
pub const BB4: u16 = AS4;
pub const BB5: u16 = AS5;
pub const BB6: u16 = AS6;
pub const BB7: u16 = AS7;
pub const BB8: u16 = AS8;

pub const B0: u16 = TABLE[11][0];
pub const B1: u16 = TABLE[11][1];
pub const B2: u16 = TABLE[11][2];
pub const B3: u16 = TABLE[11][3];
pub const B4: u16 = TABLE[11][4];
pub const B5: u16 = TABLE[11][5];
pub const B6: u16 = TABLE[11][6];
pub const B7: u16 = TABLE[11][7];
pub const B8: u16 = TABLE[11][8];
