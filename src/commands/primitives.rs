use super::CommandDef;

pub const COMMANDS: &[CommandDef] = command_table!{Primitives;
    "BLC4" ["xcorner", "ycorner", "width", "height", "depth"] -> OutputVolumeArea, "Create a rectangular area or block volume by corner points";
    "BLC5" ["xcenter", "ycenter", "width", "height", "depth"] -> OutputVolumeArea, "Create a rectangular area or block volume by center and corner points";
    "BLOCK" ["x1", "x2", "y1", "y2", "z1", "z2"] -> OutputVolumeArea, "Create a block volume based on working plane coordinates";
    "CON4" ["xcenter", "ycenter", "rad1", "rad2", "depth"] -> OutputVolumeArea, "Create a conical volume anywhere on the working plane";
    "CONE" ["rbot", "rtop", "z1", "z2", "theta1", "theta2"] -> OutputVolumeArea, "Create a conical volume centered about the working plane origin";
    "CYL4" ["xcenter", "ycenter", "rad1", "theta1", "rad2", "theta2", "depth"] -> OutputVolumeArea, "Create a circular area or cylindrical volume anywhere on the working plane";
    "CYL5" ["xedge1", "yedge1", "xedge2", "yedge2", "depth"] -> OutputVolumeArea, "Create a circular area or cylindrical volume by end points";
    "CYLIND" ["rad1", "rad2", "z1", "z2", "theta1", "theta2"] -> OutputVolumeArea, "Create a cylindrical volume centered about the working plane origin";
    "PCIRC" ["rad1", "rad2", "theta1", "theta2"] -> OutputVolumeArea, "Create a circular area centered about the working plane origin";
    "POLY" [], "Create a polygonal area based on working plane coordinate pairs";
    "PRI2" [], "Create a polygonal area or a prism volume by vertices";
    "PRISM" ["z1", "z2"], "Create a prism volume based on working plane coordinate pairs";
    "PTXY" ["x1", "y1", "x2", "y2", "x3", "y3", "x4", "y4"], "Define coordinate pairs for use in polygons and prisms";
    "RECTNG" ["x1", "x2", "y1", "y2"] -> OutputVolumeArea, "Create a rectangular area anywhere on the working plane";
    "RPOLY" ["nsides", "lside", "majrad", "minrad"], "Create a regular polygonal area centered about the working plane origin";
    "RPR4" ["nsides", "xcenter", "ycenter", "radius", "theta", "depth"], "Create a regular polygonal area or prism volume anywhere on the working plane";
    "RPRISM" ["z1", "z2", "nsides", "lside", "majrad", "minrad"], "Create a regular prism volume centered about the working plane origin";
    "SPH4" ["xcenter", "ycenter", "rad1", "rad2"] -> OutputVolumeArea, "Create a spherical volume anywhere on the working plane";
    "SPH5" ["xedge1", "yedge1", "xedge2", "yedge2"] -> OutputVolumeArea, "Create a spherical volume by diameter end points";
    "SPHERE" ["rad1", "rad2", "theta1", "theta2"] -> OutputVolumeArea, "Create a spherical volume centered about the working plane origin";
    "TORUS" ["rad1", "rad2", "rad3", "theta1", "theta2"] -> OutputVolumeArea, "Create a toroidal volume";
};
