//! The static element table.
//!
//! Lanthanides sit in row 9 and actinides in row 10; `layout` recomputes
//! their on-screen columns.

use super::Category::{
    Actinide, AlkalineEarthMetal, AlkaliMetal, Halogen, Hydrogen, Lanthanide, Metalloid,
    NobleGas, Nonmetal, PoorMetal, TransitionMetal,
};
use super::{Category, Color, Element, Position};

#[allow(clippy::too_many_arguments)]
const fn el(
    symbol: &'static str,
    name: &'static str,
    atomic_number: u8,
    row: u8,
    col: u8,
    category: Category,
    description: &'static str,
    color: u32,
) -> Element {
    Element {
        symbol,
        name,
        atomic_number,
        position: Position::new(row, col),
        category,
        description,
        color: Color::from_hex(color),
    }
}

/// All 118 elements, ordered by atomic number.
#[rustfmt::skip]
pub static PERIODIC_TABLE: [Element; 118] = [
    el("H", "Hydrogen", 1, 1, 1, Hydrogen, "The lightest and most abundant element in the universe.", 0xFF6B6B),
    el("He", "Helium", 2, 1, 18, NobleGas, "A noble gas used in balloons and as a coolant.", 0x9B59B6),
    el("Li", "Lithium", 3, 2, 1, AlkaliMetal, "A soft metal used in batteries and mood stabilizers.", 0xE74C3C),
    el("Be", "Beryllium", 4, 2, 2, AlkalineEarthMetal, "A lightweight metal used in aerospace applications.", 0xF39C12),
    el("B", "Boron", 5, 2, 13, Metalloid, "A metalloid essential for plant growth and used in glass.", 0xF1C40F),
    el("C", "Carbon", 6, 2, 14, Nonmetal, "The basis of all organic life and forms diamonds and graphite.", 0x2ECC71),
    el("N", "Nitrogen", 7, 2, 15, Nonmetal, "Makes up 78% of Earth's atmosphere and is essential for proteins.", 0x2ECC71),
    el("O", "Oxygen", 8, 2, 16, Nonmetal, "Essential for respiration and makes up 21% of the atmosphere.", 0x2ECC71),
    el("F", "Fluorine", 9, 2, 17, Halogen, "The most reactive element, used in toothpaste and Teflon.", 0x3498DB),
    el("Ne", "Neon", 10, 2, 18, NobleGas, "A noble gas famous for its use in bright advertising signs.", 0x9B59B6),
    el("Na", "Sodium", 11, 3, 1, AlkaliMetal, "A reactive metal essential for nerve function and found in salt.", 0xE74C3C),
    el("Mg", "Magnesium", 12, 3, 2, AlkalineEarthMetal, "A light metal used in alloys and essential for chlorophyll.", 0xF39C12),
    el("Al", "Aluminum", 13, 3, 13, PoorMetal, "A lightweight metal widely used in packaging and construction.", 0x95A5A6),
    el("Si", "Silicon", 14, 3, 14, Metalloid, "The second most abundant element in Earth's crust, used in computer chips.", 0xF1C40F),
    el("P", "Phosphorus", 15, 3, 15, Nonmetal, "Essential for DNA, RNA, and energy storage in living organisms.", 0x2ECC71),
    el("S", "Sulfur", 16, 3, 16, Nonmetal, "Known for its yellow color and distinctive smell, used in matches.", 0x2ECC71),
    el("Cl", "Chlorine", 17, 3, 17, Halogen, "A toxic gas used for water purification and in bleach.", 0x3498DB),
    el("Ar", "Argon", 18, 3, 18, NobleGas, "A noble gas used in light bulbs and welding.", 0x9B59B6),
    el("K", "Potassium", 19, 4, 1, AlkaliMetal, "Essential for muscle and nerve function, abundant in bananas.", 0xE74C3C),
    el("Ca", "Calcium", 20, 4, 2, AlkalineEarthMetal, "Essential for strong bones and teeth, found in dairy products.", 0xF39C12),
    el("Sc", "Scandium", 21, 4, 3, TransitionMetal, "A rare metal used in aerospace and sports equipment.", 0xE67E22),
    el("Ti", "Titanium", 22, 4, 4, TransitionMetal, "A strong, lightweight metal used in aircraft and medical implants.", 0xE67E22),
    el("V", "Vanadium", 23, 4, 5, TransitionMetal, "Used to strengthen steel and in rechargeable batteries.", 0xE67E22),
    el("Cr", "Chromium", 24, 4, 6, TransitionMetal, "Used for chrome plating and stainless steel production.", 0xE67E22),
    el("Mn", "Manganese", 25, 4, 7, TransitionMetal, "Essential for steel production and enzyme function.", 0xE67E22),
    el("Fe", "Iron", 26, 4, 8, TransitionMetal, "The most common element on Earth, essential for blood and steel.", 0xE67E22),
    el("Co", "Cobalt", 27, 4, 9, TransitionMetal, "Used in batteries, magnets, and blue pigments.", 0xE67E22),
    el("Ni", "Nickel", 28, 4, 10, TransitionMetal, "Used in coins, stainless steel, and rechargeable batteries.", 0xE67E22),
    el("Cu", "Copper", 29, 4, 11, TransitionMetal, "An excellent conductor used in wiring and plumbing.", 0xE67E22),
    el("Zn", "Zinc", 30, 4, 12, TransitionMetal, "Used for galvanizing steel and essential for immune function.", 0xE67E22),
    el("Ga", "Gallium", 31, 4, 13, PoorMetal, "A metal that melts in your hand, used in electronics.", 0x95A5A6),
    el("Ge", "Germanium", 32, 4, 14, Metalloid, "A semiconductor used in fiber optics and electronics.", 0xF1C40F),
    el("As", "Arsenic", 33, 4, 15, Metalloid, "A toxic metalloid historically used as poison.", 0xF1C40F),
    el("Se", "Selenium", 34, 4, 16, Nonmetal, "An essential trace element with antioxidant properties.", 0x2ECC71),
    el("Br", "Bromine", 35, 4, 17, Halogen, "The only liquid nonmetal at room temperature.", 0x3498DB),
    el("Kr", "Krypton", 36, 4, 18, NobleGas, "A noble gas used in high-performance light bulbs.", 0x9B59B6),
    el("Rb", "Rubidium", 37, 5, 1, AlkaliMetal, "A highly reactive alkali metal used in atomic clocks.", 0xE74C3C),
    el("Sr", "Strontium", 38, 5, 2, AlkalineEarthMetal, "Used in fireworks for red color and in medical imaging.", 0xF39C12),
    el("Y", "Yttrium", 39, 5, 3, TransitionMetal, "Used in LED phosphors and superconductors.", 0xE67E22),
    el("Zr", "Zirconium", 40, 5, 4, TransitionMetal, "Highly corrosion-resistant, used in nuclear reactors.", 0xE67E22),
    el("Nb", "Niobium", 41, 5, 5, TransitionMetal, "Used in superconducting magnets and steel alloys.", 0xE67E22),
    el("Mo", "Molybdenum", 42, 5, 6, TransitionMetal, "Used to strengthen steel and in high-temperature applications.", 0xE67E22),
    el("Tc", "Technetium", 43, 5, 7, TransitionMetal, "The first artificially produced element, used in medical imaging.", 0xE67E22),
    el("Ru", "Ruthenium", 44, 5, 8, TransitionMetal, "Used in electronics and as a catalyst.", 0xE67E22),
    el("Rh", "Rhodium", 45, 5, 9, TransitionMetal, "Used in catalytic converters and jewelry.", 0xE67E22),
    el("Pd", "Palladium", 46, 5, 10, TransitionMetal, "Used in catalytic converters and electronics.", 0xE67E22),
    el("Ag", "Silver", 47, 5, 11, TransitionMetal, "A precious metal with the highest electrical conductivity.", 0xE67E22),
    el("Cd", "Cadmium", 48, 5, 12, TransitionMetal, "Used in batteries and pigments, but highly toxic.", 0xE67E22),
    el("In", "Indium", 49, 5, 13, PoorMetal, "Used in touchscreens and LCD displays.", 0x95A5A6),
    el("Sn", "Tin", 50, 5, 14, PoorMetal, "Used in solder and to coat other metals to prevent corrosion.", 0x95A5A6),
    el("Sb", "Antimony", 51, 5, 15, Metalloid, "Used in flame retardants and semiconductors.", 0xF1C40F),
    el("Te", "Tellurium", 52, 5, 16, Metalloid, "Used in solar panels and thermoelectric devices.", 0xF1C40F),
    el("I", "Iodine", 53, 5, 17, Halogen, "Essential for thyroid function and used as antiseptic.", 0x3498DB),
    el("Xe", "Xenon", 54, 5, 18, NobleGas, "A noble gas used in high-intensity lamps and anesthesia.", 0x9B59B6),
    el("Cs", "Caesium", 55, 6, 1, AlkaliMetal, "The most reactive metal, used in atomic clocks.", 0xE74C3C),
    el("Ba", "Barium", 56, 6, 2, AlkalineEarthMetal, "Used in medical imaging and fireworks for green color.", 0xF39C12),
    el("La", "Lanthanum", 57, 9, 3, Lanthanide, "Used in camera lenses and hybrid car batteries.", 0x1ABC9C),
    el("Ce", "Cerium", 58, 9, 4, Lanthanide, "The most abundant rare earth element, used in catalysts.", 0x1ABC9C),
    el("Pr", "Praseodymium", 59, 9, 5, Lanthanide, "Used in magnets and yellow glass coloring.", 0x1ABC9C),
    el("Nd", "Neodymium", 60, 9, 6, Lanthanide, "Used in powerful permanent magnets.", 0x1ABC9C),
    el("Pm", "Promethium", 61, 9, 7, Lanthanide, "A radioactive element used in nuclear batteries.", 0x1ABC9C),
    el("Sm", "Samarium", 62, 9, 8, Lanthanide, "Used in magnets and cancer treatment.", 0x1ABC9C),
    el("Eu", "Europium", 63, 9, 9, Lanthanide, "Used in red phosphors for TV screens and LEDs.", 0x1ABC9C),
    el("Gd", "Gadolinium", 64, 9, 10, Lanthanide, "Used in MRI contrast agents and neutron capture.", 0x1ABC9C),
    el("Tb", "Terbium", 65, 9, 11, Lanthanide, "Used in green phosphors and solid-state devices.", 0x1ABC9C),
    el("Dy", "Dysprosium", 66, 9, 12, Lanthanide, "Used in high-performance magnets and lasers.", 0x1ABC9C),
    el("Ho", "Holmium", 67, 9, 13, Lanthanide, "Has the highest magnetic strength of any element.", 0x1ABC9C),
    el("Er", "Erbium", 68, 9, 14, Lanthanide, "Used in fiber optic amplifiers and lasers.", 0x1ABC9C),
    el("Tm", "Thulium", 69, 9, 15, Lanthanide, "The rarest stable rare earth element, used in X-ray sources.", 0x1ABC9C),
    el("Yb", "Ytterbium", 70, 9, 16, Lanthanide, "Used in stainless steel and atomic clocks.", 0x1ABC9C),
    el("Lu", "Lutetium", 71, 9, 17, Lanthanide, "The hardest and densest rare earth element.", 0x1ABC9C),
    el("Hf", "Hafnium", 72, 6, 4, TransitionMetal, "Used in nuclear reactor control rods.", 0xE67E22),
    el("Ta", "Tantalum", 73, 6, 5, TransitionMetal, "Highly corrosion-resistant, used in electronics.", 0xE67E22),
    el("W", "Tungsten", 74, 6, 6, TransitionMetal, "Has the highest melting point, used in light bulb filaments.", 0xE67E22),
    el("Re", "Rhenium", 75, 6, 7, TransitionMetal, "One of the rarest elements, used in jet engines.", 0xE67E22),
    el("Os", "Osmium", 76, 6, 8, TransitionMetal, "The densest naturally occurring element.", 0xE67E22),
    el("Ir", "Iridium", 77, 6, 9, TransitionMetal, "Extremely corrosion-resistant, used in spark plugs.", 0xE67E22),
    el("Pt", "Platinum", 78, 6, 10, TransitionMetal, "A precious metal used in jewelry and catalysts.", 0xE67E22),
    el("Au", "Gold", 79, 6, 11, TransitionMetal, "A precious metal prized for jewelry and electronics.", 0xE67E22),
    el("Hg", "Mercury", 80, 6, 12, TransitionMetal, "The only liquid metal at room temperature.", 0xE67E22),
    el("Tl", "Thallium", 81, 6, 13, PoorMetal, "A toxic metal once used in rat poison.", 0x95A5A6),
    el("Pb", "Lead", 82, 6, 14, PoorMetal, "A heavy metal used in batteries and radiation shielding.", 0x95A5A6),
    el("Bi", "Bismuth", 83, 6, 15, PoorMetal, "Used in cosmetics and low-melting alloys.", 0x95A5A6),
    el("Po", "Polonium", 84, 6, 16, Metalloid, "A highly radioactive element discovered by Marie Curie.", 0xF1C40F),
    el("At", "Astatine", 85, 6, 17, Halogen, "The rarest naturally occurring element on Earth.", 0x3498DB),
    el("Rn", "Radon", 86, 6, 18, NobleGas, "A radioactive noble gas that can accumulate in homes.", 0x9B59B6),
    el("Fr", "Francium", 87, 7, 1, AlkaliMetal, "The most unstable of the first 101 elements.", 0xE74C3C),
    el("Ra", "Radium", 88, 7, 2, AlkalineEarthMetal, "A radioactive element once used in glow-in-the-dark paint.", 0xF39C12),
    el("Ac", "Actinium", 89, 10, 3, Actinide, "A radioactive element used in neutron sources.", 0x16A085),
    el("Th", "Thorium", 90, 10, 4, Actinide, "A radioactive metal used in nuclear reactors.", 0x16A085),
    el("Pa", "Protactinium", 91, 10, 5, Actinide, "A rare radioactive metal with few uses.", 0x16A085),
    el("U", "Uranium", 92, 10, 6, Actinide, "Used as fuel in nuclear reactors and weapons.", 0x16A085),
    el("Np", "Neptunium", 93, 10, 7, Actinide, "The first transuranium element to be synthesized.", 0x16A085),
    el("Pu", "Plutonium", 94, 10, 8, Actinide, "Used in nuclear weapons and reactors.", 0x16A085),
    el("Am", "Americium", 95, 10, 9, Actinide, "Used in smoke detectors and neutron sources.", 0x16A085),
    el("Cm", "Curium", 96, 10, 10, Actinide, "Named after Marie and Pierre Curie.", 0x16A085),
    el("Bk", "Berkelium", 97, 10, 11, Actinide, "A synthetic element with no commercial uses.", 0x16A085),
    el("Cf", "Californium", 98, 10, 12, Actinide, "Used in neutron sources and nuclear reactors.", 0x16A085),
    el("Es", "Einsteinium", 99, 10, 13, Actinide, "Named after Albert Einstein.", 0x16A085),
    el("Fm", "Fermium", 100, 10, 14, Actinide, "Named after Enrico Fermi.", 0x16A085),
    el("Md", "Mendelevium", 101, 10, 15, Actinide, "Named after Dmitri Mendeleev.", 0x16A085),
    el("No", "Nobelium", 102, 10, 16, Actinide, "Named after Alfred Nobel.", 0x16A085),
    el("Lr", "Lawrencium", 103, 10, 17, Actinide, "Named after Ernest Lawrence.", 0x16A085),
    el("Rf", "Rutherfordium", 104, 7, 4, TransitionMetal, "A synthetic superheavy element.", 0xE67E22),
    el("Db", "Dubnium", 105, 7, 5, TransitionMetal, "Named after the city of Dubna, Russia.", 0xE67E22),
    el("Sg", "Seaborgium", 106, 7, 6, TransitionMetal, "Named after Glenn T. Seaborg.", 0xE67E22),
    el("Bh", "Bohrium", 107, 7, 7, TransitionMetal, "Named after Niels Bohr.", 0xE67E22),
    el("Hs", "Hassium", 108, 7, 8, TransitionMetal, "Named after the German state of Hesse.", 0xE67E22),
    el("Mt", "Meitnerium", 109, 7, 9, TransitionMetal, "Named after Lise Meitner.", 0xE67E22),
    el("Ds", "Darmstadtium", 110, 7, 10, TransitionMetal, "Named after Darmstadt, Germany.", 0xE67E22),
    el("Rg", "Roentgenium", 111, 7, 11, TransitionMetal, "Named after Wilhelm Röntgen.", 0xE67E22),
    el("Cn", "Copernicium", 112, 7, 12, TransitionMetal, "Named after Nicolaus Copernicus.", 0xE67E22),
    el("Nh", "Nihonium", 113, 7, 13, PoorMetal, "Named after Japan (Nihon).", 0x95A5A6),
    el("Fl", "Flerovium", 114, 7, 14, PoorMetal, "Named after Georgy Flyorov.", 0x95A5A6),
    el("Mc", "Moscovium", 115, 7, 15, PoorMetal, "Named after Moscow, Russia.", 0x95A5A6),
    el("Lv", "Livermorium", 116, 7, 16, PoorMetal, "Named after Livermore, California.", 0x95A5A6),
    el("Ts", "Tennessine", 117, 7, 17, Halogen, "Named after Tennessee, USA.", 0x3498DB),
    el("Og", "Oganesson", 118, 7, 18, NobleGas, "Named after Yuri Oganessian.", 0x9B59B6),
];
